use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, NodeList};

use crate::domain::{
    errors::{UiError, UiResult, browser_error},
    logging::{LogComponent, get_logger},
    portfolio::{FeedbackMessage, FormTotal},
};

/// Shown in the modal container when the sell form cannot be loaded
pub const SELL_FORM_ERROR: &str = "Error loading sell form";

/// Collect a `NodeList` into elements, skipping non-element nodes
pub fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| browser_error(selector, e))?;
    Ok(node_list_elements(&list))
}

/// `element.closest(ancestor)?.querySelector(selector)`
pub fn closest_query(element: &Element, ancestor: &str, selector: &str) -> Option<Element> {
    element
        .closest(ancestor)
        .ok()
        .flatten()?
        .query_selector(selector)
        .ok()
        .flatten()
}

/// First id that resolves to an element
pub fn first_by_ids(document: &Document, ids: &[String]) -> Option<Element> {
    ids.iter().find_map(|id| document.get_element_by_id(id))
}

pub fn as_input(element: Element) -> Option<HtmlInputElement> {
    element.dyn_into::<HtmlInputElement>().ok()
}

fn owner_document(element: &Element) -> UiResult<Document> {
    element
        .owner_document()
        .ok_or_else(|| UiError::BrowserApi("element has no owner document".to_string()))
}

/// Replace the region's contents with `<span class="text-{kind}">{text}</span>`.
/// The text goes in as a text node, never as markup.
pub fn render_feedback(region: &Element, message: &FeedbackMessage) -> UiResult<()> {
    let document = owner_document(region)?;
    let span = document
        .create_element("span")
        .map_err(|e| browser_error("create span", e))?;
    span.set_class_name(&message.kind.css_class());
    span.set_text_content(Some(&message.text));

    region.set_inner_html("");
    region
        .append_child(&span)
        .map_err(|e| browser_error("append feedback", e))?;
    Ok(())
}

/// Replace the container's contents with a danger alert
pub fn render_error_notice(container: &Element, text: &str) -> UiResult<()> {
    let document = owner_document(container)?;
    let alert = document
        .create_element("div")
        .map_err(|e| browser_error("create alert", e))?;
    alert.set_class_name("alert alert-danger");
    alert.set_text_content(Some(text));

    container.set_inner_html("");
    container
        .append_child(&alert)
        .map_err(|e| browser_error("append alert", e))?;
    Ok(())
}

pub fn render_total(total_element: &Element, total: &FormTotal) {
    total_element.set_text_content(Some(&total.display()));
}

/// Shows the sell modal
pub trait ModalPresenter {
    fn show(&self, modal: &Element) -> UiResult<()>;
}

/// Uses the page's `bootstrap.Modal` when loaded, otherwise toggles the
/// classes bootstrap would set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapModal;

impl BootstrapModal {
    fn bootstrap_instance(modal: &Element) -> Option<JsValue> {
        let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() {
            return None;
        }
        let modal_class = Reflect::get(&bootstrap, &JsValue::from_str("Modal")).ok()?;
        let get_or_create: Function = Reflect::get(&modal_class, &JsValue::from_str("getOrCreateInstance"))
            .ok()?
            .dyn_into()
            .ok()?;
        get_or_create.call1(&modal_class, modal).ok()
    }

    fn show_without_bootstrap(modal: &Element) -> UiResult<()> {
        modal
            .class_list()
            .add_1("show")
            .map_err(|e| browser_error("modal class", e))?;
        modal
            .set_attribute("style", "display: block;")
            .map_err(|e| browser_error("modal style", e))?;
        let _ = modal.remove_attribute("aria-hidden");
        Ok(())
    }
}

impl ModalPresenter for BootstrapModal {
    fn show(&self, modal: &Element) -> UiResult<()> {
        if let Some(instance) = Self::bootstrap_instance(modal) {
            let show: Function = Reflect::get(&instance, &JsValue::from_str("show"))
                .map_err(|e| browser_error("modal.show", e))?
                .dyn_into()
                .map_err(|e| browser_error("modal.show is not a function", e))?;
            show.call0(&instance).map_err(|e| browser_error("modal.show()", e))?;
            return Ok(());
        }

        get_logger().debug(
            LogComponent::Infrastructure("BootstrapModal"),
            "bootstrap.Modal not loaded, toggling classes directly",
        );
        Self::show_without_bootstrap(modal)
    }
}
