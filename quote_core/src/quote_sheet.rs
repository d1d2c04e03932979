//! # Quote Sheet
//!
//! Printable, customer-facing quote. The sheet pairs a job with its
//! breakdown and document metadata (issue date and quote id). Date and id
//! are passed in by the caller so that building a sheet stays deterministic.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quote_core::quote_sheet::QuoteSheet;
//! use quote_core::{GlobalConfig, JobDetails};
//! use uuid::Uuid;
//!
//! let issued_on = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
//! let sheet = QuoteSheet::new(GlobalConfig::default(), JobDetails::default(), issued_on, Uuid::nil());
//!
//! let text = sheet.render_text().unwrap();
//! assert!(text.contains("TOTAL"));
//! assert!(text.contains("$580.92"));
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::calculations::itemize::{line_items, CostCategory};
use crate::calculations::quote::{compute_breakdown, CostBreakdown};
use crate::config::GlobalConfig;
use crate::currency::format_currency;
use crate::errors::QuoteResult;
use crate::job::JobDetails;

/// Width of the concept column in the text layout
const CONCEPT_WIDTH: usize = 44;

/// A quote ready to print or hand to a customer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSheet {
    pub quote_id: Uuid,
    pub issued_on: NaiveDate,
    pub config: GlobalConfig,
    pub job: JobDetails,
    pub breakdown: CostBreakdown,
}

impl QuoteSheet {
    /// Build a sheet, computing the breakdown from the inputs.
    pub fn new(config: GlobalConfig, job: JobDetails, issued_on: NaiveDate, quote_id: Uuid) -> Self {
        let breakdown = compute_breakdown(&config, &job);
        QuoteSheet {
            quote_id,
            issued_on,
            config,
            job,
            breakdown,
        }
    }

    /// Last eight hex digits of the quote id, for display.
    pub fn short_id(&self) -> String {
        let simple = self.quote_id.simple().to_string();
        simple[simple.len() - 8..].to_string()
    }

    /// Client label, or "Sin nombre" when the brand is blank.
    pub fn client_label(&self) -> &str {
        let brand = self.job.brand.trim();
        if brand.is_empty() {
            "Sin nombre"
        } else {
            brand
        }
    }

    /// Render the sheet as plain text.
    ///
    /// # Errors
    ///
    /// `QuoteError::InvalidCurrencyCode` if the configured currency code is malformed.
    pub fn render_text(&self) -> QuoteResult<String> {
        let code = &self.config.currency;
        let money = |amount: f64| format_currency(amount, code);
        let b = &self.breakdown;

        let mut lines = vec![
            "COTIZACIÓN".to_string(),
            "Servicios de Impresión 3D".to_string(),
            format!("Fecha: {}", self.issued_on.format("%d/%m/%Y")),
            format!("ID: {}", self.short_id()),
            String::new(),
            "DETALLES DEL PROYECTO".to_string(),
            format!("  Proyecto / Cliente: {}", self.client_label()),
            format!("  Material: {} ({}g)", self.job.material, self.job.consumed_grams),
            format!("  Tiempo Estimado: {} horas", self.job.print_hours),
            String::new(),
            "DESGLOSE ECONÓMICO".to_string(),
        ];

        for line in line_items(b) {
            lines.push(amount_row(line.category.invoice_title(), &money(line.amount)?));
            match line.category {
                CostCategory::Material => lines.push(format!(
                    "    Filamento {} ({}/g)",
                    self.job.material,
                    money(b.cost_per_gram)?
                )),
                CostCategory::MachineTime => lines.push(format!(
                    "    {} horas x {}/h",
                    self.job.print_hours,
                    money(b.total_hourly_cost)?
                )),
                CostCategory::PostProcess => {}
            }
        }

        lines.push(String::new());
        lines.push(amount_row("SUBTOTAL", &money(b.subtotal)?));
        lines.push(amount_row("Margen Comercial / Ganancia", &money(b.profit())?));
        lines.push(amount_row("TOTAL", &money(b.total_with_markup)?));
        lines.push(String::new());
        lines.push(
            "Este documento es una estimación de costos basada en los parámetros proporcionados."
                .to_string(),
        );
        lines.push("Gracias por su preferencia".to_string());

        Ok(lines.join("\n"))
    }
}

fn amount_row(concept: &str, amount: &str) -> String {
    format!("  {:<width$}{:>16}", concept, amount, width = CONCEPT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with(job: JobDetails) -> QuoteSheet {
        let issued_on = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        QuoteSheet::new(GlobalConfig::default(), job, issued_on, id)
    }

    #[test]
    fn test_header() {
        let text = sheet_with(JobDetails::default()).render_text().unwrap();
        assert!(text.starts_with("COTIZACIÓN\n"));
        assert!(text.contains("Fecha: 09/03/2026"));
        assert!(text.contains("ID: 0e5fe0c8"));
    }

    #[test]
    fn test_short_id() {
        let sheet = sheet_with(JobDetails::default());
        assert_eq!(sheet.short_id(), "0e5fe0c8");
    }

    #[test]
    fn test_itemized_lines() {
        let text = sheet_with(JobDetails::default()).render_text().unwrap();
        assert!(text.contains("Material de Impresión"));
        assert!(text.contains("$90.00"));
        assert!(text.contains("Filamento PLA ($0.60/g)"));
        assert!(text.contains("5 horas x $78.82/h"));
        assert!(text.contains("$394.10"));
        assert!(text.contains("Post-Proceso y Acabado"));
        assert!(text.contains("$484.10"));
        assert!(text.contains("$96.82"));
        assert!(text.contains("$580.92"));
    }

    #[test]
    fn test_project_details() {
        let text = sheet_with(JobDetails::default()).render_text().unwrap();
        assert!(text.contains("Proyecto / Cliente: Proyecto 1"));
        assert!(text.contains("Material: PLA (150g)"));
        assert!(text.contains("Tiempo Estimado: 5 horas"));
    }

    #[test]
    fn test_blank_brand() {
        let job = JobDetails {
            brand: "  ".to_string(),
            ..JobDetails::default()
        };
        let sheet = sheet_with(job);
        assert_eq!(sheet.client_label(), "Sin nombre");
    }

    #[test]
    fn test_invalid_currency_fails_render() {
        let mut sheet = sheet_with(JobDetails::default());
        sheet.config.currency = "pesos".to_string();
        assert!(sheet.render_text().is_err());
    }

    #[test]
    fn test_breakdown_matches_engine() {
        let sheet = sheet_with(JobDetails::default());
        assert_eq!(sheet.breakdown, compute_breakdown(&sheet.config, &sheet.job));
    }
}
