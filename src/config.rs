use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::domain::logging::LogLevel;

/// Class names, attributes and ids the controller looks for in the page markup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomHooks {
    pub search_trigger_class: String,
    pub input_group_class: String,
    pub feedback_group_class: String,
    pub feedback_class: String,
    /// Tried in order; the first one present receives the looked-up price
    pub price_field_ids: Vec<String>,

    pub sell_trigger_class: String,
    pub stock_id_attribute: String,
    pub modal_id: String,
    pub modal_content_id: String,
    pub modal_quantity_id: String,
    pub modal_price_id: String,
    pub modal_total_id: String,

    pub quantity_field_class: String,
    pub price_field_class: String,
    pub total_class: String,
}

impl Default for DomHooks {
    fn default() -> Self {
        Self {
            search_trigger_class: "stock-search-btn".to_string(),
            input_group_class: "input-group".to_string(),
            feedback_group_class: "mb-3".to_string(),
            feedback_class: "form-text".to_string(),
            price_field_ids: vec!["price".to_string(), "priceTransaction".to_string()],
            sell_trigger_class: "sell-stock-btn".to_string(),
            stock_id_attribute: "data-stock-id".to_string(),
            modal_id: "sellStockModal".to_string(),
            modal_content_id: "sellModalContent".to_string(),
            modal_quantity_id: "quantity".to_string(),
            modal_price_id: "price".to_string(),
            modal_total_id: "total-value".to_string(),
            quantity_field_class: "quantity-field".to_string(),
            price_field_class: "price-field".to_string(),
            total_class: "total-value".to_string(),
        }
    }
}

impl DomHooks {
    /// `.class` selector
    pub fn class_selector(class: &str) -> String {
        format!(".{}", class)
    }

    /// `#id` selector
    pub fn id_selector(id: &str) -> String {
        format!("#{}", id)
    }
}

/// Page-level settings, overridable from the host page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub search_endpoint: String,
    pub sell_form_endpoint: String,
    pub log_level: LogLevel,
    pub hooks: DomHooks,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "/search_stock".to_string(),
            sell_form_endpoint: "/sell_stock.html".to_string(),
            log_level: LogLevel::Info,
            hooks: DomHooks::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

static PAGE_CONFIG: OnceCell<PageConfig> = OnceCell::new();

/// Store the active config; later calls are ignored
pub fn init_config(config: PageConfig) -> &'static PageConfig {
    PAGE_CONFIG.get_or_init(|| config)
}

/// Active config, defaults when never initialized
pub fn page_config() -> &'static PageConfig {
    PAGE_CONFIG.get_or_init(PageConfig::default)
}
