//! # Cotizador3D CLI Application
//!
//! Terminal front-end for the quote engine.
//!
//! - Interactive mode (default): prompts for the job, prints the quote sheet
//!   and the breakdown JSON.
//! - JSON mode (`--json`): reads a `QuoteRequest` from stdin or `--input`,
//!   writes the `QuoteResponse` to stdout.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use quote_core::api::{self, QuoteRequest};
use quote_core::calculations::{chart_slices, hourly_lines};
use quote_core::currency::{format_currency, symbol_for_code, Currency};
use quote_core::materials::FilamentMaterial;
use quote_core::quote_sheet::QuoteSheet;
use quote_core::{GlobalConfig, JobDetails, QuoteError};

#[derive(Debug, Parser)]
#[command(name = "quote_cli", version, about = "Quote 3D print jobs from shop costs")]
struct Cli {
    /// Read a JSON quote request and print a JSON response
    #[arg(long)]
    json: bool,

    /// Request file for --json mode (stdin when omitted)
    #[arg(long, requires = "json")]
    input: Option<PathBuf>,

    /// Display currency for interactive mode
    #[arg(long, env = "QUOTE_CURRENCY")]
    currency: Option<String>,
}

/// Initialize tracing on stderr, `warn` unless RUST_LOG says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    prompt_line(prompt).unwrap_or_else(|| default.to_string())
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    match prompt_line(prompt).map(|s| s.to_lowercase()) {
        Some(answer) if matches!(answer.as_str(), "s" | "si" | "sí" | "y" | "yes") => true,
        Some(answer) if matches!(answer.as_str(), "n" | "no") => false,
        _ => default,
    }
}

fn read_request(input: Option<&PathBuf>) -> Result<String, QuoteError> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| QuoteError::input_error(path.display().to_string(), e.to_string())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| QuoteError::input_error("stdin", e.to_string()))?;
            Ok(buf)
        }
    }
}

fn run_json(cli: &Cli) -> Result<(), QuoteError> {
    let text = read_request(cli.input.as_ref())?;
    let request = QuoteRequest::from_json(&text)?;
    debug!(brand = %request.job.brand, "parsed quote request");

    let response = api::handle(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn collect_job(currency: &str) -> JobDetails {
    let defaults = JobDetails::default();
    let symbol = symbol_for_code(currency);

    let materials: Vec<&str> = FilamentMaterial::ALL.iter().map(|m| m.label()).collect();
    println!("Materiales: {}", materials.join(", "));

    let brand = prompt_string(&format!("Proyecto / Cliente [{}]: ", defaults.brand), &defaults.brand);
    let material = prompt_string(&format!("Material [{}]: ", defaults.material), &defaults.material);
    if FilamentMaterial::from_label(&material).is_none() {
        info!(material = %material, "material not in catalog, keeping free-text label");
    }

    let consumed_grams = prompt_f64(
        &format!("Gramos consumidos [{}]: ", defaults.consumed_grams),
        defaults.consumed_grams,
    );
    let print_hours = prompt_f64(
        &format!("Horas de impresión [{}]: ", defaults.print_hours),
        defaults.print_hours,
    );
    let labor_rate_per_hour = prompt_f64(
        &format!("Tarifa por hora ({}) [{}]: ", symbol, defaults.labor_rate_per_hour),
        defaults.labor_rate_per_hour,
    );

    let use_fixed_post_process_price = prompt_bool("Precio fijo post-proceso? (s/n) [n]: ", false);
    let (post_process_hours, fixed_post_process_price) = if use_fixed_post_process_price {
        let price = prompt_f64(&format!("Precio fijo ({}) [0]: ", symbol), 0.0);
        (defaults.post_process_hours, price)
    } else {
        let hours = prompt_f64("Horas post-proceso [0]: ", 0.0);
        (hours, defaults.fixed_post_process_price)
    };

    let markup_percentage = prompt_f64(
        &format!("Margen de ganancia % [{}]: ", defaults.markup_percentage),
        defaults.markup_percentage,
    );

    JobDetails {
        brand,
        material,
        consumed_grams,
        print_hours,
        labor_rate_per_hour,
        post_process_hours,
        use_fixed_post_process_price,
        fixed_post_process_price,
        markup_percentage,
    }
}

fn run_interactive(cli: &Cli) -> Result<(), QuoteError> {
    println!("Cotizador3D - Calculadora de costos de impresión 3D");
    println!("===================================================");
    println!();

    let mut config = GlobalConfig::default();
    if let Some(code) = &cli.currency {
        // Validate early so a typo fails before the prompts
        format_currency(0.0, code)?;
        config.currency = code.to_ascii_uppercase();
    }
    if let Ok(currency) = Currency::from_code(&config.currency) {
        println!("Moneda: {}", currency.label());
    }

    let job = collect_job(&config.currency);
    let sheet = QuoteSheet::new(config, job, Local::now().date_naive(), Uuid::new_v4());
    debug!(quote_id = %sheet.quote_id, "built quote sheet");

    println!();
    println!("{}", sheet.render_text()?);

    println!();
    println!("Desglose por hora:");
    for line in hourly_lines(&sheet.breakdown) {
        println!(
            "  {:<16}{:>16}/h",
            line.label,
            format_currency(line.per_hour, &sheet.config.currency)?
        );
    }

    println!();
    println!("Proporciones:");
    for slice in chart_slices(&sheet.breakdown) {
        println!("  {:<16}{:>6.1}%", slice.category.display_name(), slice.share * 100.0);
    }

    println!();
    println!("JSON Output (for API use):");
    println!("{}", serde_json::to_string_pretty(&sheet.breakdown)?);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = if cli.json {
        run_json(&cli)
    } else {
        run_interactive(&cli)
    };

    match outcome.context("quote failed") {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(quote_err) = e.downcast_ref::<QuoteError>() {
                if let Ok(json) = serde_json::to_string_pretty(quote_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::from(1)
        }
    }
}
