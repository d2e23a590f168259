use gloo::net::http::Request;
use url::form_urlencoded;

use crate::config::PageConfig;
use crate::domain::{
    errors::{NetworkError, NetworkResult},
    logging::{LogComponent, LogLevel, get_logger},
    portfolio::{PortfolioGateway, StockLookupResult},
};

/// HTTP client for the portfolio endpoints
#[derive(Clone, Debug)]
pub struct PortfolioHttpClient {
    search_endpoint: String,
    sell_form_endpoint: String,
}

impl Default for PortfolioHttpClient {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

impl PortfolioHttpClient {
    pub fn new(search_endpoint: impl Into<String>, sell_form_endpoint: impl Into<String>) -> Self {
        Self {
            search_endpoint: search_endpoint.into(),
            sell_form_endpoint: sell_form_endpoint.into(),
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.search_endpoint.clone(), config.sell_form_endpoint.clone())
    }

    pub fn search_url(&self, symbol: &str) -> String {
        format!("{}?symbol={}", self.search_endpoint, encode_query_value(symbol))
    }

    pub fn sell_form_url(&self, stock_id: &str) -> String {
        format!("{}?stock_id={}", self.sell_form_endpoint, encode_query_value(stock_id))
    }

    async fn get_text(&self, url: &str) -> NetworkResult<(u16, String)> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to read body: {}", e)))?;

        Ok((status, body))
    }
}

impl PortfolioGateway for PortfolioHttpClient {
    async fn search_stock(&self, symbol: &str) -> NetworkResult<StockLookupResult> {
        let url = self.search_url(symbol);
        get_logger().debug(
            LogComponent::Infrastructure("PortfolioHttpClient"),
            &format!("Looking up symbol via {}", url),
        );

        // Error bodies arrive with 4xx statuses and are still JSON
        let (status, body) = self.get_text(&url).await?;
        StockLookupResult::from_json(&body).map_err(|e| {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("PortfolioHttpClient"),
                "Lookup response is not valid JSON",
                &format!("status={} url={}", status, url),
            );
            NetworkError::ParseFailed(e.to_string())
        })
    }

    async fn sell_form_fragment(&self, stock_id: &str) -> NetworkResult<String> {
        let url = self.sell_form_url(stock_id);
        get_logger().debug(
            LogComponent::Infrastructure("PortfolioHttpClient"),
            &format!("Loading sell form from {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to send request: {}", e)))?;

        // Unlike lookups, the body of a failed response is not a usable fragment
        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to read body: {}", e)))
    }
}

/// `application/x-www-form-urlencoded` encoding of one query value
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
