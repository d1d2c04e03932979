//! # quote_core - 3D Print Quote Engine
//!
//! `quote_core` is the computational heart of Cotizador3D. It prices a 3D
//! print job from shop overhead, filament use, labor, and printer
//! depreciation, and returns every intermediate value so the result can be
//! itemized and charted. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `compute_breakdown` is a pure function of its two inputs
//! - **Total**: zero denominators fall back to `1`; the engine never fails
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for the surfaces around the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::{compute_breakdown, format_currency, GlobalConfig, JobDetails};
//!
//! let config = GlobalConfig::default();
//! let job = JobDetails {
//!     consumed_grams: 220.0,
//!     print_hours: 7.5,
//!     ..JobDetails::default()
//! };
//!
//! let breakdown = compute_breakdown(&config, &job);
//! let total = format_currency(breakdown.total_with_markup, &config.currency).unwrap();
//! println!("Total: {}", total);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Shop-wide cost configuration
//! - [`job`] - Per-quote job details
//! - [`calculations`] - The quote engine and itemized views
//! - [`currency`] - es-MX currency formatting and the supported currency list
//! - [`materials`] - Filament catalog (display only)
//! - [`session`] - Mutable inputs with memoized recompute
//! - [`quote_sheet`] - Printable quote
//! - [`api`] - JSON request/response boundary
//! - [`errors`] - Structured error types

pub mod api;
pub mod calculations;
pub mod config;
pub mod currency;
pub mod errors;
pub mod job;
pub mod materials;
pub mod quote_sheet;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_breakdown, CostBreakdown, QuoteEngine};
pub use config::GlobalConfig;
pub use currency::{format_currency, Currency};
pub use errors::{QuoteError, QuoteResult};
pub use job::{JobDetails, PostProcessPricing};
pub use session::QuoteSession;
