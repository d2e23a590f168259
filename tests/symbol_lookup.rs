use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use portfolio_ui_wasm::application::{LookupOutcome, LookupSequencer, SymbolLookupUseCase, validate_symbol};
use portfolio_ui_wasm::domain::errors::{NetworkError, NetworkResult};
use portfolio_ui_wasm::domain::portfolio::{
    FeedbackMessage, MessageKind, PortfolioGateway, StockLookupResult,
};

struct FakeGateway {
    response: NetworkResult<StockLookupResult>,
    calls: Cell<usize>,
    last_symbol: RefCell<Option<String>>,
}

impl FakeGateway {
    fn answering(body: &str) -> Self {
        Self::with(Ok(StockLookupResult::from_json(body).unwrap()))
    }

    fn with(response: NetworkResult<StockLookupResult>) -> Self {
        Self { response, calls: Cell::new(0), last_symbol: RefCell::new(None) }
    }
}

impl PortfolioGateway for FakeGateway {
    async fn search_stock(&self, symbol: &str) -> NetworkResult<StockLookupResult> {
        self.calls.set(self.calls.get() + 1);
        *self.last_symbol.borrow_mut() = Some(symbol.to_string());
        self.response.clone()
    }

    async fn sell_form_fragment(&self, stock_id: &str) -> NetworkResult<String> {
        Ok(format!("<form data-stock=\"{}\"></form>", stock_id))
    }
}

#[test]
fn empty_symbol_never_reaches_the_network() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(r#"{"error": "unused"}"#));
    let outcome = block_on(use_case.lookup(""));

    assert_eq!(use_case.gateway().calls.get(), 0);
    assert_eq!(outcome.message, FeedbackMessage::new(MessageKind::Warning, "Please enter a stock symbol"));
    assert_eq!(outcome.price_value, None);
}

#[test]
fn whitespace_symbol_is_sent_as_typed() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(r#"{"error": "not found"}"#));
    block_on(use_case.lookup(" "));

    assert_eq!(use_case.gateway().calls.get(), 1);
    assert_eq!(use_case.gateway().last_symbol.borrow().as_deref(), Some(" "));
}

#[test]
fn service_error_is_shown_verbatim() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(r#"{"error": "not found"}"#));
    let outcome = block_on(use_case.lookup("ZZZZ"));

    assert_eq!(outcome.message.kind, MessageKind::Danger);
    assert_eq!(outcome.message.text, "not found");
    assert_eq!(outcome.price_value, None);
}

#[test]
fn quote_fills_message_and_price() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(
        r#"{"symbol": "ACME", "company_name": "Acme", "current_price": 12.3}"#,
    ));
    let outcome = block_on(use_case.lookup("ACME"));

    assert_eq!(outcome.message.kind, MessageKind::Success);
    assert_eq!(outcome.message.text, "Acme - Current price: $12.30");
    assert_eq!(outcome.price_value.as_deref(), Some("12.30"));
    assert_eq!(outcome.message.kind.css_class(), "text-success");
}

#[test]
fn half_cent_price_rounds_up() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(
        r#"{"company_name": "Acme", "current_price": 1.125}"#,
    ));
    let outcome = block_on(use_case.lookup("ACME"));

    assert_eq!(outcome.price_value.as_deref(), Some("1.13"));
    assert_eq!(outcome.message.text, "Acme - Current price: $1.13");
}

#[test]
fn empty_service_error_shows_fixed_text() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(r#"{"error": ""}"#));
    let outcome = block_on(use_case.lookup("ACME"));

    assert_eq!(outcome, LookupOutcome {
        message: FeedbackMessage::lookup_failed(),
        price_value: None,
    });
}

#[test]
fn quote_without_symbol_field_is_accepted() {
    let result = StockLookupResult::from_json(r#"{"company_name": "Acme", "current_price": 5}"#).unwrap();
    assert!(matches!(result, StockLookupResult::Found(ref quote) if quote.symbol.is_none()));
}

#[test]
fn transport_failure_shows_fixed_text() {
    let gateway = FakeGateway::with(Err(NetworkError::HttpRequestFailed("offline".to_string())));
    let outcome = block_on(SymbolLookupUseCase::new(gateway).lookup("AAPL"));

    assert_eq!(outcome, LookupOutcome {
        message: FeedbackMessage::new(MessageKind::Danger, "Error checking symbol"),
        price_value: None,
    });
}

#[test]
fn parse_failure_shows_fixed_text() {
    let outcome = LookupOutcome::from_result(Err(NetworkError::ParseFailed("<html>".to_string())));
    assert_eq!(outcome.message, FeedbackMessage::lookup_failed());
}

#[test]
fn sell_fragment_comes_from_gateway() {
    let use_case = SymbolLookupUseCase::new(FakeGateway::answering(r#"{"error": "x"}"#));
    let html = block_on(use_case.gateway().sell_form_fragment("7")).unwrap();
    assert_eq!(html, "<form data-stock=\"7\"></form>");
}

#[test]
fn validate_symbol_rejects_only_empty_input() {
    assert_eq!(validate_symbol(""), Err(FeedbackMessage::empty_symbol()));
    assert_eq!(validate_symbol("msft"), Ok("msft"));
}

#[test]
fn only_the_latest_lookup_is_current() {
    let sequencer = LookupSequencer::new();
    let first = sequencer.begin();
    assert!(sequencer.is_current(first));

    let second = sequencer.begin();
    assert!(!sequencer.is_current(first));
    assert!(sequencer.is_current(second));
}
