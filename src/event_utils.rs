use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::domain::errors::{UiResult, browser_error};

#[derive(Clone, Debug, Default)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

/// Owns a listener closure. Dropping the handle detaches the listener;
/// `forget` leaves it attached for the rest of the page's life.
pub struct ListenerHandle {
    target: EventTarget,
    event_name: String,
    callback: Option<Closure<dyn FnMut(Event)>>,
    capture: bool,
}

impl ListenerHandle {
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self.target.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

pub fn event_listener_with_options<E>(
    target: &EventTarget,
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> UiResult<ListenerHandle>
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().to_string();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| browser_error(&event_name, e))?;

    Ok(ListenerHandle {
        target: target.clone(),
        event_name,
        callback: Some(callback),
        capture: options.capture,
    })
}

/// Listener with default (non-passive, bubbling) options
pub fn event_listener<E>(
    target: &EventTarget,
    event: E,
    cb: impl FnMut(E::EventType) + 'static,
) -> UiResult<ListenerHandle>
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    event_listener_with_options(target, event, &EventOptions::default(), cb)
}
