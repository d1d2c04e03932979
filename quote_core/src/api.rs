//! # JSON Request/Response
//!
//! Boundary types for exposing the engine to other processes. Field names
//! match the in-process records (camelCase).
//!
//! ## Request
//!
//! ```json
//! {
//!   "config": { "spoolCost": 600.0, "spoolWeight": 1000.0, "...": "..." },
//!   "job": { "brand": "Proyecto 1", "material": "PLA", "...": "..." }
//! }
//! ```
//!
//! ## Response
//!
//! ```json
//! {
//!   "breakdown": { "materialCost": 90.0, "...": "..." },
//!   "profit": 96.82,
//!   "formatted": {
//!     "subtotal": "$484.10",
//!     "profit": "$96.82",
//!     "totalWithMarkup": "$580.92"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::quote::{compute_breakdown, CostBreakdown};
use crate::config::GlobalConfig;
use crate::currency::format_currency;
use crate::errors::{QuoteError, QuoteResult};
use crate::job::JobDetails;

/// A quote request: both input records, all fields required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub config: GlobalConfig,
    pub job: JobDetails,
}

impl QuoteRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Headline amounts rendered in the request's currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub profit: String,
    pub total_with_markup: String,
}

/// Result of a quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub breakdown: CostBreakdown,
    /// `totalWithMarkup − subtotal`
    pub profit: f64,
    pub formatted: FormattedTotals,
}

/// Compute the breakdown for a request and render its headline amounts.
///
/// # Errors
///
/// - `QuoteError::InvalidCurrencyCode` if `config.currency` is malformed.
/// - `QuoteError::SerializationError` if a breakdown field is NaN or infinite.
///   JSON has no representation for those values (serde_json writes `null`,
///   which does not read back as a number).
pub fn handle(request: &QuoteRequest) -> QuoteResult<QuoteResponse> {
    let breakdown = compute_breakdown(&request.config, &request.job);
    if let Some((name, value)) = breakdown.fields().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(QuoteError::serialization(format!(
            "breakdown field '{}' is {} and cannot be written as JSON",
            name, value
        )));
    }
    let code = &request.config.currency;

    let formatted = FormattedTotals {
        subtotal: format_currency(breakdown.subtotal, code)?,
        profit: format_currency(breakdown.profit(), code)?,
        total_with_markup: format_currency(breakdown.total_with_markup, code)?,
    };
    debug!(currency = %code, total = %formatted.total_with_markup, "handled quote request");

    Ok(QuoteResponse {
        breakdown,
        profit: breakdown.profit(),
        formatted,
    })
}
