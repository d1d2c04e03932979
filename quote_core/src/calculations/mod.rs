//! # Quote Calculations
//!
//! This module contains the quote engine and the views derived from its
//! output. It follows the pattern:
//!
//! - Plain input records ([`GlobalConfig`](crate::config::GlobalConfig),
//!   [`JobDetails`](crate::job::JobDetails))
//! - A result record ([`CostBreakdown`]) carrying every intermediate value
//! - A pure function `compute_breakdown(config, job) -> CostBreakdown`
//!
//! ## Available Modules
//!
//! - [`quote`] - The cost breakdown engine
//! - [`itemize`] - Line items, chart slices, and per-hour detail built from a breakdown

pub mod itemize;
pub mod quote;

// Re-export commonly used types
pub use itemize::{chart_slices, hourly_lines, line_items, ChartSlice, CostCategory, HourlyLine, QuoteLine};
pub use quote::{compute_breakdown, CostBreakdown, QuoteEngine};
