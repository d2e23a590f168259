use std::cell::Cell;

use crate::domain::{
    chart::js_to_fixed,
    errors::NetworkResult,
    logging::{LogComponent, LogLevel, get_logger},
    portfolio::{FeedbackMessage, PortfolioGateway, StockLookupResult},
};

/// What the page shows after a lookup
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub message: FeedbackMessage,
    /// New value for the price field, `None` leaves it untouched
    pub price_value: Option<String>,
}

impl LookupOutcome {
    fn message_only(message: FeedbackMessage) -> Self {
        Self { message, price_value: None }
    }

    pub fn from_result(result: NetworkResult<StockLookupResult>) -> Self {
        match result {
            Ok(StockLookupResult::Failure { error }) if error.is_empty() => {
                Self::message_only(FeedbackMessage::lookup_failed())
            }
            Ok(StockLookupResult::Failure { error }) => {
                Self::message_only(FeedbackMessage::service_error(&error))
            }
            Ok(StockLookupResult::Found(quote)) => Self {
                message: FeedbackMessage::quote(&quote),
                price_value: Some(js_to_fixed(quote.current_price, 2)),
            },
            Err(e) => {
                get_logger().log_with_metadata(
                    LogLevel::Error,
                    LogComponent::Application("SymbolLookup"),
                    "Error checking symbol",
                    &e.to_string(),
                );
                Self::message_only(FeedbackMessage::lookup_failed())
            }
        }
    }
}

/// Rejects an empty symbol with the warning to show instead
pub fn validate_symbol(symbol: &str) -> Result<&str, FeedbackMessage> {
    if symbol.is_empty() {
        Err(FeedbackMessage::empty_symbol())
    } else {
        Ok(symbol)
    }
}

/// Symbol lookup: validate locally, then ask the gateway
pub struct SymbolLookupUseCase<G: PortfolioGateway> {
    gateway: G,
}

impl<G: PortfolioGateway> SymbolLookupUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Full lookup; an empty symbol never reaches the gateway
    pub async fn lookup(&self, symbol: &str) -> LookupOutcome {
        let symbol = match validate_symbol(symbol) {
            Ok(symbol) => symbol,
            Err(warning) => return LookupOutcome::message_only(warning),
        };
        LookupOutcome::from_result(self.gateway.search_stock(symbol).await)
    }
}

/// Generation counter for one trigger: only the newest request may render
#[derive(Debug, Default)]
pub struct LookupSequencer {
    latest: Cell<u64>,
}

impl LookupSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a request about to be issued; invalidates older tickets
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}
