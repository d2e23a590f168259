use std::cell::RefCell;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::form_controller::{PageBindings, initialize};
use crate::application::{ChartBuilder, PortfolioChart};
use crate::config::{PageConfig, page_config};
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    portfolio::FormTotal,
};

/// Global the host page may set before the module loads
pub const CONFIG_GLOBAL: &str = "portfolioUiConfig";

thread_local! {
    static PAGE_BINDINGS: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

fn parse_config(value: &JsValue) -> Result<PageConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    value
        .into_serde::<PageConfig>()
        .map_err(|e| JsValue::from_str(&format!("Invalid page config: {}", e)))
}

/// Config from `window.portfolioUiConfig`; defaults when the global is absent
pub fn config_from_global() -> Result<PageConfig, JsValue> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    parse_config(&value)
}

fn bind_page(config: &PageConfig) -> Result<(), JsValue> {
    let bindings = initialize(&document()?, config).map_err(AppError::from)?;
    // Replacing older bindings detaches their listeners
    PAGE_BINDINGS.with(|slot| *slot.borrow_mut() = Some(bindings));
    Ok(())
}

/// True once page behaviors are bound
pub fn is_page_initialized() -> bool {
    PAGE_BINDINGS.with(|slot| slot.borrow().is_some())
}

/// Bind search, sell and total behaviors with the active config.
/// Does nothing when the page is already bound.
#[wasm_bindgen(js_name = initializePage)]
pub fn initialize_page() -> Result<(), JsValue> {
    if is_page_initialized() {
        get_logger().debug(LogComponent::Presentation("WasmApi"), "Page already initialized");
        return Ok(());
    }
    bind_page(page_config())
}

/// Rebind the page with a (partial) config object. Only the bindings use it;
/// the active config and log level stay as the start hook set them.
#[wasm_bindgen(js_name = initializePageWithConfig)]
pub fn initialize_page_with_config(config: JsValue) -> Result<(), JsValue> {
    bind_page(&parse_config(&config)?)
}

/// `"$q×p"` with the page's lenient number parsing
#[wasm_bindgen(js_name = formatTotal)]
pub fn format_total(quantity: &str, price: &str) -> String {
    FormTotal::from_inputs(quantity, price).display()
}

/// JS handle for a drawn chart
#[wasm_bindgen(js_name = PortfolioChart)]
pub struct PortfolioChartHandle {
    chart: PortfolioChart,
}

impl From<PortfolioChart> for PortfolioChartHandle {
    fn from(chart: PortfolioChart) -> Self {
        Self { chart }
    }
}

#[wasm_bindgen(js_class = PortfolioChart)]
impl PortfolioChartHandle {
    /// "pie", "line" or "bar"
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.chart.kind().as_ref().to_string()
    }

    #[wasm_bindgen(js_name = tooltipLabel)]
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.chart.tooltip_label(index)
    }

    #[wasm_bindgen(js_name = tickLabel)]
    pub fn tick_label(&self, value: f64) -> Option<String> {
        self.chart.tick_label(value)
    }

    /// Chart.js-shaped configuration object
    #[wasm_bindgen(js_name = toConfig)]
    pub fn to_config(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.chart.spec().to_config())
            .map_err(|e| JsValue::from_str(&format!("Failed to export chart config: {}", e)))
    }

    pub fn redraw(&self) -> Result<(), JsValue> {
        self.chart.redraw().map_err(JsValue::from)
    }
}

/// Holdings composition pie. An empty `colors` uses the default palette.
#[wasm_bindgen(js_name = createPortfolioPieChart)]
pub fn create_portfolio_pie_chart(
    element_id: &str,
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<String>,
) -> Result<PortfolioChartHandle, JsValue> {
    let chart = ChartBuilder::build_allocation_chart(&document()?, element_id, labels, values, colors)?;
    Ok(chart.into())
}

#[wasm_bindgen(js_name = createPerformanceLineChart)]
pub fn create_performance_line_chart(
    element_id: &str,
    labels: Vec<String>,
    values: Vec<f64>,
) -> Result<PortfolioChartHandle, JsValue> {
    let chart = ChartBuilder::build_performance_chart(&document()?, element_id, labels, values)?;
    Ok(chart.into())
}

#[wasm_bindgen(js_name = createStockPerformanceBarChart)]
pub fn create_stock_performance_bar_chart(
    element_id: &str,
    labels: Vec<String>,
    returns: Vec<f64>,
) -> Result<PortfolioChartHandle, JsValue> {
    let chart = ChartBuilder::build_returns_chart(&document()?, element_id, labels, returns)?;
    Ok(chart.into())
}
