//! # Job Details
//!
//! `JobDetails` describes one print job to be quoted: how much filament and
//! machine time it consumes, the operator's rate, how finishing work is
//! priced, and the markup.
//!
//! `brand` and `material` are carried for display; they take no part in the
//! arithmetic.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "brand": "Proyecto 1",
//!   "material": "PLA",
//!   "consumedGrams": 150.0,
//!   "printHours": 5.0,
//!   "laborRatePerHour": 50.0,
//!   "postProcessHours": 0.0,
//!   "useFixedPostProcessPrice": false,
//!   "fixedPostProcessPrice": 0.0,
//!   "markupPercentage": 20.0
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Per-quote job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    /// Project or client label
    pub brand: String,

    /// Filament label (e.g. "PLA"); see [`crate::materials::FilamentMaterial`]
    pub material: String,

    /// Filament consumed by the job, in grams
    pub consumed_grams: f64,

    /// Machine time in hours
    pub print_hours: f64,

    /// Operator wage per hour
    pub labor_rate_per_hour: f64,

    /// Finishing time in hours, used when `use_fixed_post_process_price` is false
    pub post_process_hours: f64,

    /// Selects flat-fee post-processing instead of hourly
    pub use_fixed_post_process_price: bool,

    /// Flat finishing fee, used when `use_fixed_post_process_price` is true
    pub fixed_post_process_price: f64,

    /// Profit margin in percent, applied multiplicatively to the subtotal
    pub markup_percentage: f64,
}

/// The finishing-work pricing mode selected by a job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostProcessPricing {
    /// Flat fee; post-process hours are ignored
    Fixed { price: f64 },
    /// Hours billed at the labor rate; the flat fee is ignored
    Hourly { hours: f64 },
}

impl JobDetails {
    /// Resolve the post-process flag into the single active pricing mode.
    ///
    /// ```rust
    /// use quote_core::job::{JobDetails, PostProcessPricing};
    ///
    /// let job = JobDetails {
    ///     use_fixed_post_process_price: true,
    ///     fixed_post_process_price: 100.0,
    ///     post_process_hours: 3.0,
    ///     ..JobDetails::default()
    /// };
    /// assert_eq!(job.post_process_pricing(), PostProcessPricing::Fixed { price: 100.0 });
    /// ```
    pub fn post_process_pricing(&self) -> PostProcessPricing {
        if self.use_fixed_post_process_price {
            PostProcessPricing::Fixed {
                price: self.fixed_post_process_price,
            }
        } else {
            PostProcessPricing::Hourly {
                hours: self.post_process_hours,
            }
        }
    }

    /// Markup as a multiplier: `1 + markupPercentage / 100`.
    pub fn markup_multiplier(&self) -> f64 {
        1.0 + self.markup_percentage / 100.0
    }
}

impl Default for JobDetails {
    fn default() -> Self {
        JobDetails {
            brand: "Proyecto 1".to_string(),
            material: "PLA".to_string(),
            consumed_grams: 150.0,
            print_hours: 5.0,
            labor_rate_per_hour: 50.0,
            post_process_hours: 0.0,
            use_fixed_post_process_price: false,
            fixed_post_process_price: 0.0,
            markup_percentage: 20.0,
        }
    }
}
