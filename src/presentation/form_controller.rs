use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, MouseEvent};

use crate::application::{LookupSequencer, SymbolLookupUseCase, validate_symbol};
use crate::config::{DomHooks, PageConfig};
use crate::domain::{
    errors::{UiError, UiResult},
    logging::{LogComponent, LogLevel, get_logger},
    portfolio::{FeedbackMessage, FormTotal, PortfolioGateway},
};
use crate::event_utils::{ListenerHandle, event_listener};
use crate::{log_debug, log_error, log_info};
use crate::infrastructure::{
    http::PortfolioHttpClient,
    ui::{
        BootstrapModal, ModalPresenter, SELL_FORM_ERROR, as_input, closest_query, first_by_ids,
        query_all, render_error_notice, render_feedback, render_total,
    },
};

const COMPONENT: LogComponent = LogComponent::Presentation("FormController");

/// Quantity, price and total elements of one trade form
pub struct TotalBinding {
    quantity_field: HtmlInputElement,
    price_field: HtmlInputElement,
    total_element: Element,
}

impl TotalBinding {
    pub fn new(quantity_field: HtmlInputElement, price_field: HtmlInputElement, total_element: Element) -> Self {
        Self { quantity_field, price_field, total_element }
    }

    /// quantity × price from the current field values
    pub fn current_total(&self) -> FormTotal {
        FormTotal::from_inputs(&self.quantity_field.value(), &self.price_field.value())
    }

    pub fn refresh(&self) {
        render_total(&self.total_element, &self.current_total());
    }

    /// Recompute on every input of either field, and once right away
    pub fn attach(self) -> UiResult<Vec<ListenerHandle>> {
        let binding = Rc::new(self);
        let mut handles = Vec::with_capacity(2);
        for field in [&binding.quantity_field, &binding.price_field] {
            let binding = Rc::clone(&binding);
            handles.push(event_listener(field.as_ref(), ev::input, move |_| binding.refresh())?);
        }
        binding.refresh();
        Ok(handles)
    }
}

/// Everything `initialize` attached. Dropping it detaches the listeners.
#[derive(Default)]
pub struct PageBindings {
    listeners: Vec<ListenerHandle>,
    pub search_triggers: usize,
    pub sell_triggers: usize,
    pub total_bindings: usize,
}

impl PageBindings {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Keep every listener attached for the rest of the page's life
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Wires the portfolio pages' search, sell and total behaviors
pub struct FormInteractionController<G: PortfolioGateway + 'static> {
    document: Document,
    hooks: DomHooks,
    lookup: SymbolLookupUseCase<G>,
    modal: BootstrapModal,
    /// Listeners inside the current sell-form fragment
    modal_listeners: RefCell<Vec<ListenerHandle>>,
}

/// Bind all page behaviors against the HTTP endpoints in `config`
pub fn initialize(document: &Document, config: &PageConfig) -> UiResult<PageBindings> {
    initialize_with_gateway(document, config, PortfolioHttpClient::from_config(config))
}

/// Bind all page behaviors against `gateway`
pub fn initialize_with_gateway<G: PortfolioGateway + 'static>(
    document: &Document,
    config: &PageConfig,
    gateway: G,
) -> UiResult<PageBindings> {
    let controller = Rc::new(FormInteractionController {
        document: document.clone(),
        hooks: config.hooks.clone(),
        lookup: SymbolLookupUseCase::new(gateway),
        modal: BootstrapModal,
        modal_listeners: RefCell::new(Vec::new()),
    });

    let mut bindings = PageBindings::default();
    controller.setup_stock_symbol_search(&mut bindings)?;
    controller.setup_sell_modal_triggers(&mut bindings)?;
    controller.setup_form_totals(&mut bindings)?;

    log_info!(
        COMPONENT,
        "Page bound: {} search triggers, {} sell triggers, {} total bindings",
        bindings.search_triggers,
        bindings.sell_triggers,
        bindings.total_bindings
    );
    Ok(bindings)
}

fn show_feedback(region: Option<&Element>, message: &FeedbackMessage) {
    if let Some(region) = region {
        if let Err(e) = render_feedback(region, message) {
            log_error!(COMPONENT, "Failed to render feedback: {}", e);
        }
    }
}

impl<G: PortfolioGateway + 'static> FormInteractionController<G> {
    fn setup_stock_symbol_search(self: &Rc<Self>, bindings: &mut PageBindings) -> UiResult<()> {
        let selector = DomHooks::class_selector(&self.hooks.search_trigger_class);
        for button in query_all(&self.document, &selector)? {
            let controller = Rc::clone(self);
            let sequencer = Rc::new(LookupSequencer::new());
            let trigger = button.clone();
            let handle = event_listener(button.as_ref(), ev::click, move |event: MouseEvent| {
                event.prevent_default();
                controller.on_search_click(&trigger, &sequencer);
            })?;
            bindings.listeners.push(handle);
            bindings.search_triggers += 1;
        }
        Ok(())
    }

    fn on_search_click(self: &Rc<Self>, trigger: &Element, sequencer: &Rc<LookupSequencer>) {
        let hooks = &self.hooks;
        let feedback = closest_query(
            trigger,
            &DomHooks::class_selector(&hooks.feedback_group_class),
            &DomHooks::class_selector(&hooks.feedback_class),
        );
        let Some(input) = closest_query(trigger, &DomHooks::class_selector(&hooks.input_group_class), "input")
            .and_then(as_input)
        else {
            get_logger().warn(COMPONENT, "Search trigger has no symbol input next to it");
            return;
        };

        let symbol = input.value();
        if let Err(warning) = validate_symbol(&symbol) {
            show_feedback(feedback.as_ref(), &warning);
            return;
        }
        show_feedback(feedback.as_ref(), &FeedbackMessage::checking());

        let price_field = first_by_ids(&self.document, &hooks.price_field_ids).and_then(as_input);
        let ticket = sequencer.begin();
        let controller = Rc::clone(self);
        let sequencer = Rc::clone(sequencer);
        spawn_local(async move {
            let outcome = controller.lookup.lookup(&symbol).await;
            if !sequencer.is_current(ticket) {
                log_debug!(COMPONENT, "Dropping stale lookup response for '{}'", symbol);
                return;
            }
            show_feedback(feedback.as_ref(), &outcome.message);
            if let (Some(price), Some(field)) = (&outcome.price_value, &price_field) {
                field.set_value(price);
            }
        });
    }

    fn setup_sell_modal_triggers(self: &Rc<Self>, bindings: &mut PageBindings) -> UiResult<()> {
        let selector = DomHooks::class_selector(&self.hooks.sell_trigger_class);
        for button in query_all(&self.document, &selector)? {
            let controller = Rc::clone(self);
            let trigger = button.clone();
            let handle = event_listener(button.as_ref(), ev::click, move |_: MouseEvent| {
                controller.on_sell_click(&trigger);
            })?;
            bindings.listeners.push(handle);
            bindings.sell_triggers += 1;
        }
        Ok(())
    }

    fn on_sell_click(self: &Rc<Self>, trigger: &Element) {
        let Some(stock_id) = trigger.get_attribute(&self.hooks.stock_id_attribute) else {
            get_logger().warn(
                COMPONENT,
                &UiError::MissingAttribute(self.hooks.stock_id_attribute.clone()).to_string(),
            );
            return;
        };
        let Some(content) = self.document.get_element_by_id(&self.hooks.modal_content_id) else {
            get_logger().warn(
                COMPONENT,
                &UiError::ElementNotFound(self.hooks.modal_content_id.clone()).to_string(),
            );
            return;
        };

        let controller = Rc::clone(self);
        spawn_local(async move {
            controller.load_sell_form(&stock_id, &content).await;
        });
    }

    async fn load_sell_form(&self, stock_id: &str, content: &Element) {
        let result = match self.lookup.gateway().sell_form_fragment(stock_id).await {
            Ok(html) => self.show_sell_form(content, &html),
            Err(e) => {
                get_logger().log_with_metadata(
                    LogLevel::Error,
                    COMPONENT,
                    "Error loading sell form",
                    &format!("stock_id={} {}", stock_id, e),
                );
                render_error_notice(content, SELL_FORM_ERROR)
            }
        };
        if let Err(e) = result {
            log_error!(COMPONENT, "Sell form update failed: {}", e);
        }
    }

    /// Inject the fragment, bind its total, then open the modal
    pub fn show_sell_form(&self, content: &Element, html: &str) -> UiResult<()> {
        content.set_inner_html(html);
        self.modal_listeners.borrow_mut().clear();

        let find = |id: &str| content.query_selector(&DomHooks::id_selector(id)).ok().flatten();
        let quantity = find(&self.hooks.modal_quantity_id).and_then(as_input);
        let price = find(&self.hooks.modal_price_id).and_then(as_input);
        if let (Some(quantity), Some(price)) = (quantity, price) {
            match find(&self.hooks.modal_total_id) {
                Some(total) => {
                    let handles = TotalBinding::new(quantity, price, total).attach()?;
                    self.modal_listeners.borrow_mut().extend(handles);
                }
                None => get_logger().debug(COMPONENT, "Sell form has no total display"),
            }
        }

        let modal = self
            .document
            .get_element_by_id(&self.hooks.modal_id)
            .ok_or_else(|| UiError::ElementNotFound(self.hooks.modal_id.clone()))?;
        self.modal.show(&modal)
    }

    fn setup_form_totals(&self, bindings: &mut PageBindings) -> UiResult<()> {
        let hooks = &self.hooks;
        let price_selector = DomHooks::class_selector(&hooks.price_field_class);
        let total_selector = DomHooks::class_selector(&hooks.total_class);

        for field in query_all(&self.document, &DomHooks::class_selector(&hooks.quantity_field_class))? {
            let Some(form) = field.closest("form").ok().flatten() else {
                continue;
            };
            let price = form.query_selector(&price_selector).ok().flatten();
            let total = form.query_selector(&total_selector).ok().flatten();
            let (Some(price), Some(total)) = (price, total) else {
                continue;
            };
            let (Some(quantity), Some(price)) = (as_input(field), as_input(price)) else {
                get_logger().debug(COMPONENT, "Quantity/price pair is not made of input elements");
                continue;
            };

            bindings.listeners.extend(TotalBinding::new(quantity, price, total).attach()?);
            bindings.total_bindings += 1;
        }
        Ok(())
    }
}
