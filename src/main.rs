#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::{net::SocketAddr, path::Path, sync::Arc};

    use dca_calculator::infrastructure::{prices::PriceBook, spot::CoinGeckoClient};
    use dca_calculator::server::{AppState, build_router, config::load_settings};
    use tracing::info;

    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let prices = PriceBook::from_json_file(Path::new(&settings.price_file))?;
    info!(
        entries = prices.len(),
        price_file = %settings.price_file,
        "price history loaded"
    );

    let state = AppState {
        prices: Arc::new(prices),
        spot: Arc::new(CoinGeckoClient::new(settings.coingecko_api_key.clone())),
    };
    let app = build_router(state, &settings.asset_dir);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "dca server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// The binary target exists only natively; the wasm bundle is built from the
// library crate type.
#[cfg(target_arch = "wasm32")]
fn main() {}
