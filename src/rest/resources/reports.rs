//! Reporting operations.
//!
//! Reports are server-computed aggregates over a date range. Each call
//! maps to one endpoint under `reports/`:
//!
//! - [`sales_summary`](ReportsApi::sales_summary) - Totals and top
//!   products for a period
//! - [`product_performance`](ReportsApi::product_performance) - Best
//!   selling products
//! - [`customer_analytics`](ReportsApi::customer_analytics) - Customer
//!   acquisition and retention figures
//! - [`profit_loss`](ReportsApi::profit_loss) - Revenue against costs
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
//!
//! let summary = client.reports().sales_summary(start, end, None).await?;
//! println!("March sales: {}", summary.total_sales);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::rest::RestClient;
use crate::clients::{ApiError, CancelToken};
use crate::rest::path::collection_action_path;
use crate::rest::resources::product::Product;

/// Sales totals for a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SalesSummary {
    /// Gross sales over the period.
    pub total_sales: f64,

    /// The number of orders placed.
    pub total_orders: i64,

    /// The average order value.
    pub average_order: f64,

    /// The best-selling products over the period.
    pub top_products: Vec<Product>,
}

/// Customer acquisition and retention figures for a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerAnalytics {
    /// Customers who made their first purchase in the period.
    pub new_customers: i64,

    /// The fraction of prior customers who purchased again.
    pub retention_rate: f64,

    /// The average lifetime value across active customers.
    pub average_lifetime_value: f64,
}

/// Revenue against costs for a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfitLoss {
    /// Total revenue.
    pub revenue: f64,

    /// Total costs.
    pub costs: f64,

    /// Revenue minus cost of goods sold.
    pub gross_profit: f64,

    /// Gross profit minus operating costs.
    pub net_profit: f64,
}

/// Access to server-computed reports.
///
/// Obtained from [`Puxbay::reports`](crate::Puxbay::reports). Dates are
/// sent as `YYYY-MM-DD`.
#[derive(Debug)]
pub struct ReportsApi<'a> {
    rest: &'a RestClient,
    cancel: CancelToken,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self {
            rest,
            cancel: CancelToken::new(),
        }
    }

    /// Replaces the handle's cancellation token.
    ///
    /// Requests issued through the handle stop early once the token is
    /// cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fetches the sales summary for a period.
    ///
    /// Sends a GET to `reports/sales-summary/`, restricted to a single
    /// branch when `branch` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the date range is rejected.
    pub async fn sales_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        branch: Option<&str>,
    ) -> Result<SalesSummary, ApiError> {
        let mut query = vec![
            ("start_date".to_string(), start.to_string()),
            ("end_date".to_string(), end.to_string()),
        ];
        if let Some(branch) = branch {
            query.push(("branch".to_string(), branch.to_string()));
        }
        self.rest
            .get(
                &collection_action_path("reports", "sales-summary"),
                Some(query),
                &self.cancel,
            )
            .await
    }

    /// Fetches the best-selling products.
    ///
    /// Sends a GET to `reports/product-performance/`. At most `limit`
    /// products are returned; the date range defaults to the server's
    /// standard reporting window when omitted.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn product_performance(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Vec<Product>, ApiError> {
        let mut query = vec![("limit".to_string(), limit.to_string())];
        if let Some(start) = start {
            query.push(("start_date".to_string(), start.to_string()));
        }
        if let Some(end) = end {
            query.push(("end_date".to_string(), end.to_string()));
        }
        self.rest
            .get(
                &collection_action_path("reports", "product-performance"),
                Some(query),
                &self.cancel,
            )
            .await
    }

    /// Fetches customer acquisition and retention figures for a period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the date range is rejected.
    pub async fn customer_analytics(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CustomerAnalytics, ApiError> {
        let query = vec![
            ("start_date".to_string(), start.to_string()),
            ("end_date".to_string(), end.to_string()),
        ];
        self.rest
            .get(
                &collection_action_path("reports", "customer-analytics"),
                Some(query),
                &self.cancel,
            )
            .await
    }

    /// Fetches the profit and loss breakdown for a period.
    ///
    /// Sends a GET to `reports/profit-loss/`, restricted to a single
    /// branch when `branch` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the date range is rejected.
    pub async fn profit_loss(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        branch: Option<&str>,
    ) -> Result<ProfitLoss, ApiError> {
        let mut query = vec![
            ("start_date".to_string(), start.to_string()),
            ("end_date".to_string(), end.to_string()),
        ];
        if let Some(branch) = branch {
            query.push(("branch".to_string(), branch.to_string()));
        }
        self.rest
            .get(
                &collection_action_path("reports", "profit-loss"),
                Some(query),
                &self.cancel,
            )
            .await
    }
}
