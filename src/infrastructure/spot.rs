use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

const COINGECKO_SIMPLE_PRICE_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

/// Today's BTC/USD quote. None means the upstream is unavailable right now
/// (rate limit, network trouble, unexpected body) - callers surface that as
/// the missing-`current_price` response, never as a crash.
#[async_trait]
pub trait SpotPriceSource: Send + Sync {
    async fn current_price(&self) -> Option<f64>;
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: f64,
}

/// CoinGecko `/simple/price` client; the demo API key is optional, the free
/// tier works without one (just with a tighter rate limit).
pub struct CoinGeckoClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SpotPriceSource for CoinGeckoClient {
    async fn current_price(&self) -> Option<f64> {
        let mut request = self.http.get(COINGECKO_SIMPLE_PRICE_URL);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<SimplePriceResponse>().await {
                    Ok(body) => Some(body.bitcoin.usd),
                    Err(error) => {
                        warn!(%error, "coingecko body did not parse");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(status = %response.status(), "coingecko request rejected");
                None
            }
            Err(error) => {
                warn!(%error, "coingecko request failed");
                None
            }
        }
    }
}

/// Fixed quote for tests and offline runs.
pub struct FixedSpot(pub Option<f64>);

#[async_trait]
impl SpotPriceSource for FixedSpot {
    async fn current_price(&self) -> Option<f64> {
        self.0
    }
}
