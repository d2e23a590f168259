pub mod form_controller;
pub mod wasm_api;

pub use form_controller::{FormInteractionController, PageBindings, TotalBinding, initialize, initialize_with_gateway};
