//! # Quote Calculation
//!
//! Turns a shop configuration and a job into a fully itemized cost breakdown.
//!
//! ## Method
//!
//! - Monthly fixed costs are spread over the shop's productive hours
//!   (`workDaysPerMonth × workHoursPerDay`) to get per-hour rates.
//! - The printer is depreciated straight-line over `roiMonths` of those hours.
//! - The operator's rate is charged per machine hour of supervision.
//! - Material is priced from spool economics (`spoolCost / spoolWeight`).
//! - Post-processing is either a flat fee or hours at the labor rate.
//! - Markup multiplies the subtotal.
//!
//! Zero denominators (`spoolWeight`, monthly hours, `roiMonths`) are replaced
//! by `1`, silently. Nothing else is validated: negative or non-finite inputs
//! flow through the arithmetic unchanged.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::quote::compute_breakdown;
//! use quote_core::{GlobalConfig, JobDetails};
//!
//! let config = GlobalConfig::default();
//! let job = JobDetails::default();
//!
//! let breakdown = compute_breakdown(&config, &job);
//!
//! assert!((breakdown.material_cost - 90.0).abs() < 1e-9);
//! println!("Total: {:.2}", breakdown.total_with_markup);
//! println!("Profit: {:.2}", breakdown.profit());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::GlobalConfig;
use crate::job::{JobDetails, PostProcessPricing};

/// Full decomposition of a quote.
///
/// Every field derives from `(GlobalConfig, JobDetails)` alone.
///
/// ## JSON Example
///
/// ```json
/// {
///   "costPerGram": 0.6,
///   "materialCost": 90.0,
///   "electricityPerHour": 1.0417,
///   "internetPerHour": 3.125,
///   "adsPerHour": 2.6042,
///   "extrasPerHour": 10.4167,
///   "maintenancePerHour": 2.0833,
///   "totalOperationalHourly": 19.2708,
///   "operationalCostPerHour": 19.2708,
///   "depreciationPerHour": 9.5486,
///   "laborCostPerHour": 50.0,
///   "totalHourlyCost": 78.8194,
///   "printTimeCost": 394.0972,
///   "postProcessCost": 0.0,
///   "subtotal": 484.0972,
///   "totalWithMarkup": 580.9167
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Filament price per gram
    pub cost_per_gram: f64,

    /// Filament cost for the job
    pub material_cost: f64,

    /// Electricity per hour (monthly power cost / monthly hours)
    pub electricity_per_hour: f64,

    /// Internet per hour
    pub internet_per_hour: f64,

    /// Advertising per hour
    pub ads_per_hour: f64,

    /// Other fixed costs per hour
    pub extras_per_hour: f64,

    /// Maintenance per hour
    pub maintenance_per_hour: f64,

    /// Sum of the five overhead rates
    pub total_operational_hourly: f64,

    /// Same value as `total_operational_hourly`
    pub operational_cost_per_hour: f64,

    /// Printer depreciation per productive hour
    pub depreciation_per_hour: f64,

    /// Operator rate per machine hour
    pub labor_cost_per_hour: f64,

    /// Overhead + depreciation + labor, per hour
    pub total_hourly_cost: f64,

    /// Machine time cost: `printHours × totalHourlyCost`
    pub print_time_cost: f64,

    /// Finishing cost (flat fee or hourly, never both)
    pub post_process_cost: f64,

    /// Material + machine time + post-process
    pub subtotal: f64,

    /// Quoted price: subtotal with markup applied
    pub total_with_markup: f64,
}

impl CostBreakdown {
    /// Margin earned on the quote: `totalWithMarkup − subtotal`.
    pub fn profit(&self) -> f64 {
        self.total_with_markup - self.subtotal
    }

    /// Every field with its JSON name, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 16] {
        [
            ("costPerGram", self.cost_per_gram),
            ("materialCost", self.material_cost),
            ("electricityPerHour", self.electricity_per_hour),
            ("internetPerHour", self.internet_per_hour),
            ("adsPerHour", self.ads_per_hour),
            ("extrasPerHour", self.extras_per_hour),
            ("maintenancePerHour", self.maintenance_per_hour),
            ("totalOperationalHourly", self.total_operational_hourly),
            ("operationalCostPerHour", self.operational_cost_per_hour),
            ("depreciationPerHour", self.depreciation_per_hour),
            ("laborCostPerHour", self.labor_cost_per_hour),
            ("totalHourlyCost", self.total_hourly_cost),
            ("printTimeCost", self.print_time_cost),
            ("postProcessCost", self.post_process_cost),
            ("subtotal", self.subtotal),
            ("totalWithMarkup", self.total_with_markup),
        ]
    }
}

/// Stateless quote service.
///
/// Holds no data; use it where an object is more convenient than a free
/// function (e.g. injected into a UI layer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteEngine;

impl QuoteEngine {
    pub fn new() -> Self {
        QuoteEngine
    }

    /// Same as [`compute_breakdown`].
    pub fn quote(&self, config: &GlobalConfig, job: &JobDetails) -> CostBreakdown {
        compute_breakdown(config, job)
    }
}

/// Replace an exact zero denominator (including `-0.0`) with `1`.
fn guarded(denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        denominator
    }
}

/// Compute the itemized cost breakdown for a job.
///
/// Total over all inputs: zero denominators fall back to `1`, and no other
/// input is checked.
///
/// # Arguments
///
/// * `config` - Shop-wide costs and capacity
/// * `job` - The job being quoted
pub fn compute_breakdown(config: &GlobalConfig, job: &JobDetails) -> CostBreakdown {
    let monthly_hours = guarded(config.monthly_hours());
    let spool_weight = guarded(config.spool_weight);
    let roi_months = guarded(config.roi_months);

    // Material
    let cost_per_gram = config.spool_cost / spool_weight;
    let material_cost = job.consumed_grams * cost_per_gram;

    // Overhead rates
    let electricity_per_hour = config.monthly_power_cost / monthly_hours;
    let internet_per_hour = config.monthly_internet_cost / monthly_hours;
    let ads_per_hour = config.monthly_ads_cost / monthly_hours;
    let extras_per_hour = config.monthly_extra_cost / monthly_hours;
    let maintenance_per_hour = config.monthly_maintenance / monthly_hours;
    let total_operational_hourly = electricity_per_hour
        + internet_per_hour
        + ads_per_hour
        + extras_per_hour
        + maintenance_per_hour;

    let depreciation_per_hour = config.printer_cost / (roi_months * monthly_hours);

    let labor_cost_per_hour = job.labor_rate_per_hour;

    let total_hourly_cost = total_operational_hourly + depreciation_per_hour + labor_cost_per_hour;
    let print_time_cost = job.print_hours * total_hourly_cost;

    let post_process_cost = match job.post_process_pricing() {
        PostProcessPricing::Fixed { price } => price,
        PostProcessPricing::Hourly { hours } => hours * job.labor_rate_per_hour,
    };

    let subtotal = material_cost + print_time_cost + post_process_cost;
    let total_with_markup = subtotal * job.markup_multiplier();

    CostBreakdown {
        cost_per_gram,
        material_cost,
        electricity_per_hour,
        internet_per_hour,
        ads_per_hour,
        extras_per_hour,
        maintenance_per_hour,
        total_operational_hourly,
        operational_cost_per_hour: total_operational_hourly,
        depreciation_per_hour,
        labor_cost_per_hour,
        total_hourly_cost,
        print_time_cost,
        post_process_cost,
        subtotal,
        total_with_markup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn shop_config() -> GlobalConfig {
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

    fn pla_job() -> JobDetails {
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

    #[test]
    fn test_reference_scenario() {
        let b = compute_breakdown(&shop_config(), &pla_job());

        assert!((b.cost_per_gram - 0.6).abs() < TOL);
        assert!((b.material_cost - 90.0).abs() < TOL);

        // 3700 / 192
        assert!((b.total_operational_hourly - 19.270833333).abs() < 1e-6);
        assert_eq!(b.operational_cost_per_hour, b.total_operational_hourly);

        // 22000 / (12 * 192)
        assert!((b.depreciation_per_hour - 9.548611111).abs() < 1e-6);
        assert_eq!(b.labor_cost_per_hour, 50.0);
        assert!((b.total_hourly_cost - 78.819444444).abs() < 1e-6);
        assert!((b.print_time_cost - 394.097222222).abs() < 1e-6);
        assert_eq!(b.post_process_cost, 0.0);
        assert!((b.subtotal - 484.097222222).abs() < 1e-6);
        assert!((b.total_with_markup - 580.916666667).abs() < 1e-6);
    }

    #[test]
    fn test_individual_overhead_rates() {
        let b = compute_breakdown(&shop_config(), &pla_job());
        assert!((b.electricity_per_hour - 200.0 / 192.0).abs() < TOL);
        assert!((b.internet_per_hour - 600.0 / 192.0).abs() < TOL);
        assert!((b.ads_per_hour - 500.0 / 192.0).abs() < TOL);
        assert!((b.extras_per_hour - 2000.0 / 192.0).abs() < TOL);
        assert!((b.maintenance_per_hour - 400.0 / 192.0).abs() < TOL);
    }

    #[test]
    fn test_deterministic() {
        let config = shop_config();
        let job = pla_job();
        let first = compute_breakdown(&config, &job);
        for _ in 0..10 {
            assert_eq!(compute_breakdown(&config, &job), first);
        }
    }

    #[test]
    fn test_zero_spool_weight_uses_spool_cost() {
        let mut config = shop_config();
        config.spool_weight = 0.0;
        let b = compute_breakdown(&config, &pla_job());
        assert_eq!(b.cost_per_gram, 600.0);
        assert_eq!(b.material_cost, 150.0 * 600.0);
    }

    #[test]
    fn test_negative_zero_spool_weight_is_guarded() {
        let mut config = shop_config();
        config.spool_weight = -0.0;
        let b = compute_breakdown(&config, &pla_job());
        assert_eq!(b.cost_per_gram, 600.0);
    }

    #[test]
    fn test_zero_work_days_uses_raw_monthly_costs() {
        let mut config = shop_config();
        config.work_days_per_month = 0.0;
        let b = compute_breakdown(&config, &pla_job());
        assert_eq!(b.electricity_per_hour, 200.0);
        assert_eq!(b.internet_per_hour, 600.0);
        assert_eq!(b.ads_per_hour, 500.0);
        assert_eq!(b.extras_per_hour, 2000.0);
        assert_eq!(b.maintenance_per_hour, 400.0);
        assert_eq!(b.total_operational_hourly, 3700.0);
        // roi 12 * guarded hours 1
        assert!((b.depreciation_per_hour - 22000.0 / 12.0).abs() < TOL);
    }

    #[test]
    fn test_zero_work_hours_uses_raw_monthly_costs() {
        let mut config = shop_config();
        config.work_hours_per_day = 0.0;
        let b = compute_breakdown(&config, &pla_job());
        assert_eq!(b.electricity_per_hour, 200.0);
        assert_eq!(b.total_operational_hourly, 3700.0);
    }

    #[test]
    fn test_zero_roi_months_depreciates_over_one_month() {
        let mut config = shop_config();
        config.roi_months = 0.0;
        let b = compute_breakdown(&config, &pla_job());
        assert!((b.depreciation_per_hour - 22000.0 / 192.0).abs() < TOL);
        assert!(b.depreciation_per_hour.is_finite());
    }

    #[test]
    fn test_degenerate_config_is_finite() {
        let mut config = shop_config();
        config.spool_weight = 0.0;
        config.work_days_per_month = 0.0;
        config.work_hours_per_day = 0.0;
        config.roi_months = 0.0;
        let b = compute_breakdown(&config, &pla_job());

        assert_eq!(b.cost_per_gram, 600.0);
        assert_eq!(b.total_operational_hourly, 3700.0);
        assert_eq!(b.depreciation_per_hour, 22000.0);

        assert!(b.fields().iter().all(|(_, v)| v.is_finite()));
    }

    #[test]
    fn test_fixed_post_process_ignores_hours() {
        let mut job = pla_job();
        job.post_process_hours = 3.0;
        job.fixed_post_process_price = 100.0;

        let hourly = compute_breakdown(&shop_config(), &job);
        assert_eq!(hourly.post_process_cost, 150.0);

        job.use_fixed_post_process_price = true;
        let fixed = compute_breakdown(&shop_config(), &job);
        assert_eq!(fixed.post_process_cost, 100.0);
        assert!((fixed.subtotal - hourly.subtotal - (100.0 - 150.0)).abs() < TOL);

        // Machine time and material are unaffected by the toggle
        assert_eq!(fixed.print_time_cost, hourly.print_time_cost);
        assert_eq!(fixed.material_cost, hourly.material_cost);
    }

    #[test]
    fn test_fixed_post_process_adds_exactly_fee() {
        let base = compute_breakdown(&shop_config(), &pla_job());

        let mut job = pla_job();
        job.use_fixed_post_process_price = true;
        job.fixed_post_process_price = 100.0;
        job.post_process_hours = 7.5;
        let b = compute_breakdown(&shop_config(), &job);

        assert_eq!(b.post_process_cost, 100.0);
        assert!((b.subtotal - (base.subtotal + 100.0)).abs() < TOL);
    }

    #[test]
    fn test_markup_identity() {
        let mut job = pla_job();
        job.markup_percentage = 0.0;
        let b = compute_breakdown(&shop_config(), &job);
        assert_eq!(b.total_with_markup, b.subtotal);
        assert_eq!(b.profit(), 0.0);

        job.markup_percentage = 100.0;
        let b = compute_breakdown(&shop_config(), &job);
        assert!((b.total_with_markup - 2.0 * b.subtotal).abs() < TOL);
        assert!((b.profit() - b.subtotal).abs() < TOL);
    }

    #[test]
    fn test_additivity() {
        let mut job = pla_job();
        job.post_process_hours = 1.25;
        let b = compute_breakdown(&shop_config(), &job);
        assert!((b.subtotal - (b.material_cost + b.print_time_cost + b.post_process_cost)).abs() < TOL);
        assert!(
            (b.total_hourly_cost
                - (b.total_operational_hourly + b.depreciation_per_hour + b.labor_cost_per_hour))
                .abs()
                < TOL
        );
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let mut job = pla_job();
        job.markup_percentage = -150.0;
        let b = compute_breakdown(&shop_config(), &job);
        assert!(b.total_with_markup < 0.0);

        let mut config = shop_config();
        config.spool_cost = -600.0;
        let b = compute_breakdown(&config, &pla_job());
        assert!((b.material_cost + 90.0).abs() < TOL);
    }

    #[test]
    fn test_display_fields_do_not_affect_cost() {
        let mut job = pla_job();
        let pla = compute_breakdown(&shop_config(), &job);

        job.material = "Nylon".to_string();
        job.brand = String::new();
        let nylon = compute_breakdown(&shop_config(), &job);
        assert_eq!(pla, nylon);

        let mut config = shop_config();
        config.currency = "EUR".to_string();
        assert_eq!(compute_breakdown(&config, &pla_job()), pla);
    }

    #[test]
    fn test_engine_matches_function() {
        let engine = QuoteEngine::new();
        assert_eq!(
            engine.quote(&shop_config(), &pla_job()),
            compute_breakdown(&shop_config(), &pla_job())
        );
    }

    #[test]
    fn test_serialization() {
        let b = compute_breakdown(&shop_config(), &pla_job());
        let json = serde_json::to_value(b).unwrap();
        assert!(json.get("totalWithMarkup").is_some());
        assert!(json.get("electricityPerHour").is_some());
        assert!(json.get("operationalCostPerHour").is_some());

        for (name, _) in b.fields() {
            assert!(json.get(name).is_some(), "missing {}", name);
        }

        let roundtrip: CostBreakdown = serde_json::from_value(json).unwrap();
        assert!((b.total_with_markup - roundtrip.total_with_markup).abs() < TOL);
        assert!((b.depreciation_per_hour - roundtrip.depreciation_per_hour).abs() < TOL);
        assert_eq!(b.material_cost, roundtrip.material_cost);
    }
}
