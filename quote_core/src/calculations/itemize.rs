//! # Itemization
//!
//! Presentation-facing views of a [`CostBreakdown`]: the three priced
//! categories as invoice lines, their proportions for a chart, and the
//! per-hour detail list. These only read the breakdown.

use serde::{Deserialize, Serialize};

use super::quote::CostBreakdown;

/// The three categories a subtotal is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    /// Filament
    Material,
    /// Machine time and operation
    MachineTime,
    /// Finishing work
    PostProcess,
}

impl CostCategory {
    /// All categories in invoice order
    pub const ALL: [CostCategory; 3] = [
        CostCategory::Material,
        CostCategory::MachineTime,
        CostCategory::PostProcess,
    ];

    /// Short label used in charts
    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Material => "Material",
            CostCategory::MachineTime => "Tiempo Máquina",
            CostCategory::PostProcess => "Post-Proceso",
        }
    }

    /// Long label used on the printed quote
    pub fn invoice_title(&self) -> &'static str {
        match self {
            CostCategory::Material => "Material de Impresión",
            CostCategory::MachineTime => "Tiempo de Máquina & Operación",
            CostCategory::PostProcess => "Post-Proceso y Acabado",
        }
    }

    /// The breakdown amount belonging to this category
    pub fn amount(&self, breakdown: &CostBreakdown) -> f64 {
        match self {
            CostCategory::Material => breakdown.material_cost,
            CostCategory::MachineTime => breakdown.print_time_cost,
            CostCategory::PostProcess => breakdown.post_process_cost,
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One priced line of a quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub category: CostCategory,
    pub amount: f64,
}

/// One chart segment with its share of the positive total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub category: CostCategory,
    pub amount: f64,
    /// Fraction in `(0, 1]` of the sum of all charted amounts
    pub share: f64,
}

/// One per-hour rate in the detailed breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyLine {
    pub label: &'static str,
    pub per_hour: f64,
}

/// The three category lines, always in invoice order.
pub fn line_items(breakdown: &CostBreakdown) -> Vec<QuoteLine> {
    CostCategory::ALL
        .iter()
        .map(|&category| QuoteLine {
            category,
            amount: category.amount(breakdown),
        })
        .collect()
}

/// Chart segments for the categories with a strictly positive, finite amount.
///
/// Zero and negative amounts are left out so they do not clutter the chart,
/// and infinite or NaN amounts are left out because they have no share.
/// Returns an empty list when nothing qualifies.
///
/// ```rust
/// use quote_core::calculations::{chart_slices, compute_breakdown, CostCategory};
/// use quote_core::{GlobalConfig, JobDetails};
///
/// let breakdown = compute_breakdown(&GlobalConfig::default(), &JobDetails::default());
/// let slices = chart_slices(&breakdown);
///
/// // Default job has no post-processing
/// assert_eq!(slices.len(), 2);
/// assert!(slices.iter().all(|s| s.category != CostCategory::PostProcess));
/// ```
pub fn chart_slices(breakdown: &CostBreakdown) -> Vec<ChartSlice> {
    let positive: Vec<QuoteLine> = line_items(breakdown)
        .into_iter()
        .filter(|line| line.amount > 0.0 && line.amount.is_finite())
        .collect();

    // Sum relative to the largest amount so huge amounts cannot overflow to inf
    let largest = positive.iter().map(|line| line.amount).fold(0.0, f64::max);
    let relative_total: f64 = positive.iter().map(|line| line.amount / largest).sum();

    positive
        .into_iter()
        .map(|line| ChartSlice {
            category: line.category,
            amount: line.amount,
            share: (line.amount / largest) / relative_total,
        })
        .collect()
}

/// Per-hour rates in display order: overhead lines, then depreciation.
pub fn hourly_lines(breakdown: &CostBreakdown) -> Vec<HourlyLine> {
    vec![
        HourlyLine { label: "Electricidad", per_hour: breakdown.electricity_per_hour },
        HourlyLine { label: "Internet", per_hour: breakdown.internet_per_hour },
        HourlyLine { label: "Publicidad", per_hour: breakdown.ads_per_hour },
        HourlyLine { label: "Mantenimiento", per_hour: breakdown.maintenance_per_hour },
        HourlyLine { label: "Extras", per_hour: breakdown.extras_per_hour },
        HourlyLine { label: "Depreciación", per_hour: breakdown.depreciation_per_hour },
    ]
}
