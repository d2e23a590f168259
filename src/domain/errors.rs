use std::fmt::{Display, Formatter, Result as FmtResult};

use wasm_bindgen::JsValue;

/// Root error type for the crate
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Chart(ChartError),
    Network(NetworkError),
    Ui(UiError),
}

/// Chart construction and drawing errors
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    SurfaceNotFound(String),
    ContextUnavailable(String),
    SeriesLengthMismatch { labels: usize, values: usize },
    ColorCountMismatch { expected: usize, actual: usize },
    DrawingFailed(String),
}

/// Errors talking to the portfolio endpoints
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    HttpRequestFailed(String),
    HttpStatus { status: u16, status_text: String },
    ParseFailed(String),
}

/// DOM wiring errors
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    ElementNotFound(String),
    MissingAttribute(String),
    BrowserApi(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Chart(e) => write!(f, "Chart Error: {}", e),
            AppError::Network(e) => write!(f, "Network Error: {}", e),
            AppError::Ui(e) => write!(f, "UI Error: {}", e),
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ChartError::SurfaceNotFound(id) => write!(f, "display surface '{}' not found", id),
            ChartError::ContextUnavailable(id) => write!(f, "no 2d context for surface '{}'", id),
            ChartError::SeriesLengthMismatch { labels, values } => {
                write!(f, "series has {} labels but {} values", labels, values)
            }
            ChartError::ColorCountMismatch { expected, actual } => {
                write!(f, "expected {} colors, got {}", expected, actual)
            }
            ChartError::DrawingFailed(msg) => write!(f, "drawing failed: {}", msg),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::HttpRequestFailed(msg) => write!(f, "request failed: {}", msg),
            NetworkError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} - {}", status, status_text)
            }
            NetworkError::ParseFailed(msg) => write!(f, "failed to parse response: {}", msg),
        }
    }
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UiError::ElementNotFound(what) => write!(f, "element not found: {}", what),
            UiError::MissingAttribute(name) => write!(f, "missing attribute: {}", name),
            UiError::BrowserApi(msg) => write!(f, "browser API error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ChartError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for UiError {}

impl From<ChartError> for AppError {
    fn from(error: ChartError) -> Self {
        AppError::Chart(error)
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Network(error)
    }
}

impl From<UiError> for AppError {
    fn from(error: UiError) -> Self {
        AppError::Ui(error)
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<ChartError> for JsValue {
    fn from(error: ChartError) -> Self {
        AppError::from(error).into()
    }
}

/// Browser calls fail with an opaque `JsValue`; keep its debug text.
pub fn browser_error(context: &str, value: JsValue) -> UiError {
    UiError::BrowserApi(format!("{}: {:?}", context, value))
}

pub type ChartResult<T> = Result<T, ChartError>;
pub type NetworkResult<T> = Result<T, NetworkError>;
pub type UiResult<T> = Result<T, UiError>;
