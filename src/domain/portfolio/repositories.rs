use super::value_objects::StockLookupResult;
use crate::domain::errors::NetworkResult;

/// Access to the portfolio web endpoints
#[allow(async_fn_in_trait)]
pub trait PortfolioGateway {
    /// Look up a ticker symbol
    async fn search_stock(&self, symbol: &str) -> NetworkResult<StockLookupResult>;

    /// Fetch the sell form fragment for a held stock. A non-2xx answer is an
    /// error, so a server error page never reaches the modal.
    async fn sell_form_fragment(&self, stock_id: &str) -> NetworkResult<String>;
}
