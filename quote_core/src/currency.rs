//! # Currency Display
//!
//! Formatting of amounts for display, fixed to the es-MX numbering
//! convention: comma thousands separator, dot decimal separator, exactly two
//! fraction digits. Formatting is presentation only and never feeds back into
//! a [`CostBreakdown`](crate::calculations::CostBreakdown).
//!
//! | Code  | Output for `1234.5` |
//! |-------|---------------------|
//! | `MXN` | `$1,234.50`         |
//! | other | `USD 1,234.50` (no-break space after the code) |
//!
//! ## Example
//!
//! ```rust
//! use quote_core::currency::{format_currency, Currency};
//!
//! assert_eq!(format_currency(580.916, "MXN").unwrap(), "$580.92");
//! assert_eq!(Currency::Usd.format(1000.0), "USD\u{a0}1,000.00");
//! assert!(format_currency(1.0, "PESO").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Separator between an alphabetic currency code and the digits
const CODE_SPACING: char = '\u{a0}';

/// Currencies offered by the shop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mexican peso
    Mxn,
    /// US dollar
    Usd,
    /// Euro
    Eur,
    /// Colombian peso
    Cop,
    /// Argentine peso
    Ars,
    /// Chilean peso
    Clp,
    /// Peruvian sol
    Pen,
    /// Bolivian boliviano
    Bob,
}

impl Currency {
    /// All supported currencies, in settings-menu order
    pub const ALL: [Currency; 8] = [
        Currency::Mxn,
        Currency::Usd,
        Currency::Eur,
        Currency::Cop,
        Currency::Ars,
        Currency::Clp,
        Currency::Pen,
        Currency::Bob,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cop => "COP",
            Currency::Ars => "ARS",
            Currency::Clp => "CLP",
            Currency::Pen => "PEN",
            Currency::Bob => "BOB",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Mxn => "Peso Mexicano (MXN)",
            Currency::Usd => "Dólar (USD)",
            Currency::Eur => "Euro (EUR)",
            Currency::Cop => "Peso Col. (COP)",
            Currency::Ars => "Peso Arg. (ARS)",
            Currency::Clp => "Peso Chi. (CLP)",
            Currency::Pen => "Sol Peru (PEN)",
            Currency::Bob => "Boliviano (BOB)",
        }
    }

    /// Short symbol shown as an input-field prefix
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Pen => "S/",
            Currency::Bob => "Bs",
            _ => "$",
        }
    }

    /// Look up a supported currency by code (case-insensitive)
    pub fn from_code(code: &str) -> QuoteResult<Self> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| QuoteError::unsupported_currency(code))
    }

    /// Format an amount in this currency
    pub fn format(&self, amount: f64) -> String {
        render(amount, self.code())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Input-field symbol for a currency code, `$` when the code is not supported.
pub fn symbol_for_code(code: &str) -> &'static str {
    Currency::from_code(code).map(|c| c.symbol()).unwrap_or("$")
}

/// Format `amount` in the currency named by `currency_code`.
///
/// Any well-formed three-letter code is accepted, supported or not.
///
/// # Errors
///
/// `QuoteError::InvalidCurrencyCode` when the code is not three ASCII letters.
pub fn format_currency(amount: f64, currency_code: &str) -> QuoteResult<String> {
    let code = currency_code.trim();
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(QuoteError::invalid_currency_code(currency_code));
    }
    Ok(render(amount, &code.to_ascii_uppercase()))
}

fn render(amount: f64, code: &str) -> String {
    let mut out = String::new();
    if amount.is_sign_negative() && !amount.is_nan() {
        out.push('-');
    }
    if code == "MXN" {
        out.push('$');
    } else {
        out.push_str(code);
        out.push(CODE_SPACING);
    }

    if amount.is_nan() {
        out.push_str("NaN");
    } else if amount.is_infinite() {
        out.push('∞');
    } else {
        out.push_str(&group_digits(amount.abs()));
    }
    out
}

/// `1234567.891` -> `1,234,567.89`
///
/// Rounds the shortest decimal form of `magnitude` (what `Display` prints)
/// half away from zero, so `1.005` becomes `1.01` even though its binary
/// value is slightly below.
fn group_digits(magnitude: f64) -> String {
    let shortest = magnitude.to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    // Integer digits followed by exactly two fraction digits
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - 2);
    let mut grouped = String::with_capacity(int_digits.len() + int_digits.len() / 3 + 3);
    for (i, &d) in int_digits.iter().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(d));
    }
    grouped.push('.');
    grouped.extend(frac_digits.iter().map(|&d| char::from(d)));
    grouped
}
