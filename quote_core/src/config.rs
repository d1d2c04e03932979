//! # Shop Configuration
//!
//! `GlobalConfig` holds the shop-wide economics that rarely change between
//! quotes: spool price and weight, fixed monthly overhead, printer capital
//! cost and its amortization horizon, and productive capacity.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "spoolCost": 600.0,
//!   "spoolWeight": 1000.0,
//!   "monthlyPowerCost": 200.0,
//!   "monthlyInternetCost": 600.0,
//!   "monthlyAdsCost": 500.0,
//!   "monthlyExtraCost": 2000.0,
//!   "monthlyMaintenance": 400.0,
//!   "printerCost": 22000.0,
//!   "roiMonths": 12.0,
//!   "workDaysPerMonth": 24.0,
//!   "workHoursPerDay": 8.0,
//!   "currency": "MXN"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Shop-wide cost configuration.
///
/// All fields are required when deserializing. The defaults returned by
/// [`GlobalConfig::default`] are an input-collection convenience; the engine
/// never fills in values on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Price of one filament spool
    pub spool_cost: f64,

    /// Mass of one filament spool in grams
    pub spool_weight: f64,

    /// Monthly electricity bill
    pub monthly_power_cost: f64,

    /// Monthly internet bill
    pub monthly_internet_cost: f64,

    /// Monthly advertising spend
    pub monthly_ads_cost: f64,

    /// Other monthly fixed costs (rent, software, etc.)
    pub monthly_extra_cost: f64,

    /// Monthly maintenance budget (nozzles, belts, beds)
    pub monthly_maintenance: f64,

    /// Capital cost of the printer
    pub printer_cost: f64,

    /// Months over which the printer is amortized
    pub roi_months: f64,

    /// Working days per month
    pub work_days_per_month: f64,

    /// Working hours per day
    pub work_hours_per_day: f64,

    /// ISO 4217-like currency code, used for display only
    pub currency: String,
}

impl GlobalConfig {
    /// Productive capacity in hours per month (`workDaysPerMonth × workHoursPerDay`).
    ///
    /// This is the raw product, without the zero guard the engine applies
    /// when dividing by it.
    ///
    /// ```rust
    /// use quote_core::config::GlobalConfig;
    ///
    /// let config = GlobalConfig::default();
    /// assert_eq!(config.monthly_hours(), 192.0);
    /// ```
    pub fn monthly_hours(&self) -> f64 {
        self.work_days_per_month * self.work_hours_per_day
    }
}

impl Default for GlobalConfig {
    /// Reference shop profile: a single printer shop billing in MXN.
    fn default() -> Self {
        GlobalConfig {
            spool_cost: 600.0,
            spool_weight: 1000.0,
            monthly_power_cost: 200.0,
            monthly_internet_cost: 600.0,
            monthly_ads_cost: 500.0,
            monthly_extra_cost: 2000.0,
            monthly_maintenance: 400.0,
            printer_cost: 22000.0,
            roi_months: 12.0,
            work_days_per_month: 24.0,
            work_hours_per_day: 8.0,
            currency: "MXN".to_string(),
        }
    }
}
