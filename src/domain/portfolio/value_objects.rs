use derive_more::Display;
use serde::Deserialize;

use crate::domain::chart::format_currency;

/// Quote returned by the symbol lookup endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockQuote {
    #[serde(default)]
    pub symbol: Option<String>,
    pub company_name: String,
    pub current_price: f64,
}

/// Body of `/search_stock`: either a service-reported failure or a quote
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StockLookupResult {
    Failure { error: String },
    Found(StockQuote),
}

impl StockLookupResult {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

/// Severity of an inline feedback message; maps onto the page's text classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MessageKind {
    #[display(fmt = "warning")]
    Warning,
    #[display(fmt = "info")]
    Info,
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "danger")]
    Danger,
}

impl MessageKind {
    pub fn css_class(&self) -> String {
        format!("text-{}", self)
    }
}

/// Message shown next to a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FeedbackMessage {
    pub const EMPTY_SYMBOL: &'static str = "Please enter a stock symbol";
    pub const CHECKING: &'static str = "Checking symbol...";
    pub const LOOKUP_FAILED: &'static str = "Error checking symbol";

    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn empty_symbol() -> Self {
        Self::new(MessageKind::Warning, Self::EMPTY_SYMBOL)
    }

    pub fn checking() -> Self {
        Self::new(MessageKind::Info, Self::CHECKING)
    }

    pub fn lookup_failed() -> Self {
        Self::new(MessageKind::Danger, Self::LOOKUP_FAILED)
    }

    /// Service-reported failure, shown verbatim
    pub fn service_error(error: &str) -> Self {
        Self::new(MessageKind::Danger, error)
    }

    pub fn quote(quote: &StockQuote) -> Self {
        Self::new(
            MessageKind::Success,
            format!("{} - Current price: {}", quote.company_name, format_currency(quote.current_price)),
        )
    }
}

/// `parseFloat`: longest numeric prefix after leading whitespace, NaN otherwise
pub fn parse_float_lenient(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Form operand: unparsable input counts as zero
pub fn parse_operand(input: &str) -> f64 {
    let value = parse_float_lenient(input);
    if value.is_nan() { 0.0 } else { value }
}

/// quantity × price of a trade form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormTotal {
    pub quantity: f64,
    pub price: f64,
}

impl FormTotal {
    pub fn from_inputs(quantity: &str, price: &str) -> Self {
        Self {
            quantity: parse_operand(quantity),
            price: parse_operand(price),
        }
    }

    pub fn value(&self) -> f64 {
        self.quantity * self.price
    }

    /// `"$7.50"`
    pub fn display(&self) -> String {
        format_currency(self.value())
    }
}
