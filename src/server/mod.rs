pub mod config;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::dca::{AccumulationSeries, accumulation_series, format_btc, format_usd, run_dca};
use crate::domain::dca::repositories::{DateLimits, PriceHistory};
use crate::domain::form::{FormInputs, PurchaseInterval};
use crate::infrastructure::spot::SpotPriceSource;

#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<dyn PriceHistory + Send + Sync>,
    pub spot: Arc<dyn SpotPriceSource>,
}

/// `asset_dir` holds the compiled wasm bundle the page shell imports from
/// `/pkg/`; without it the form never boots.
pub fn build_router(state: AppState, asset_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index).post(calculate))
        .route("/chart", get(chart))
        .route("/limits", get(limits))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(asset_dir.as_ref()))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// The page shell; the form itself is rendered by the wasm bundle it loads.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Coverage bounds of the loaded price history; the form reads these to
/// constrain its date inputs.
async fn limits(State(state): State<AppState>) -> Json<DateLimits> {
    Json(DateLimits::covering(state.prices.as_ref()))
}

/// Calculation errors travel as a JSON body without `current_price`; the
/// form controller classifies those as upstream-unavailable.
pub type ApiRejection = (StatusCode, Json<Value>);

fn bad_request(message: impl Into<String>) -> ApiRejection {
    let message = message.into();
    warn!(%message, "rejecting calculation request");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// The eight display strings the form controller renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculateResponse {
    pub total_investment: String,
    pub total_bitcoin: String,
    pub avg_cost: String,
    pub current_value: String,
    pub profit: String,
    pub value_on_end_date: String,
    pub end_date_profit: String,
    pub current_price: String,
}

struct ParsedSubmission {
    amount: f64,
    interval: PurchaseInterval,
    start: NaiveDate,
    end: NaiveDate,
}

fn parse_submission(inputs: &FormInputs) -> Result<ParsedSubmission, String> {
    let amount = inputs
        .investment_value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid investment_value '{}'", inputs.investment_value))?;
    let interval = inputs
        .repeat_purchase
        .parse::<PurchaseInterval>()
        .map_err(|_| format!("unknown repeat_purchase '{}'", inputs.repeat_purchase))?;
    let start = inputs
        .start_date
        .parse::<NaiveDate>()
        .map_err(|_| format!("invalid start_date '{}'", inputs.start_date))?;
    let end = inputs
        .end_date
        .parse::<NaiveDate>()
        .map_err(|_| format!("invalid end_date '{}'", inputs.end_date))?;

    Ok(ParsedSubmission {
        amount,
        interval,
        start,
        end,
    })
}

async fn calculate(
    State(state): State<AppState>,
    Json(inputs): Json<FormInputs>,
) -> Result<Json<CalculateResponse>, ApiRejection> {
    handle_calculate(&state, &inputs, Utc::now().date_naive())
        .await
        .map(Json)
}

/// Split from the axum wrapper so the calculation path is testable with an
/// injected "today".
pub async fn handle_calculate(
    state: &AppState,
    inputs: &FormInputs,
    today: NaiveDate,
) -> Result<CalculateResponse, ApiRejection> {
    let submission = parse_submission(inputs).map_err(bad_request)?;
    let spot = state.spot.current_price().await;

    let outcome = run_dca(
        state.prices.as_ref(),
        spot,
        submission.amount,
        submission.interval,
        submission.start,
        submission.end,
        today,
    )
    .map_err(|error| bad_request(error.to_string()))?;

    // No spot quote, no success marker: the response must omit
    // `current_price`, which the error body does.
    let Some(current_price) = outcome.current_price else {
        return Err(bad_request(
            "current BTC price unavailable - try again in 30 seconds",
        ));
    };

    info!(
        total_investment = outcome.total_investment,
        total_bitcoin = outcome.total_bitcoin,
        avg_cost = outcome.avg_cost,
        current_price,
        "dca strategy calculated"
    );

    Ok(CalculateResponse {
        total_investment: format!("{}$", format_usd(outcome.total_investment)),
        total_bitcoin: format_btc(outcome.total_bitcoin),
        avg_cost: format!("{}$", format_usd(outcome.avg_cost)),
        current_value: format!("{}$", format_usd(outcome.current_value)),
        profit: format_usd(outcome.profit),
        value_on_end_date: format_usd(outcome.value_on_end_date),
        end_date_profit: format_usd(outcome.end_date_profit),
        current_price: format!("{}$", format_usd(current_price)),
    })
}

async fn chart(
    State(state): State<AppState>,
    Query(inputs): Query<FormInputs>,
) -> Result<Json<AccumulationSeries>, ApiRejection> {
    handle_chart(&state, &inputs, Utc::now().date_naive())
        .await
        .map(Json)
}

pub async fn handle_chart(
    state: &AppState,
    inputs: &FormInputs,
    today: NaiveDate,
) -> Result<AccumulationSeries, ApiRejection> {
    let submission = parse_submission(inputs).map_err(bad_request)?;
    let spot = state.spot.current_price().await;

    Ok(accumulation_series(
        state.prices.as_ref(),
        spot,
        submission.amount,
        submission.interval,
        submission.start,
        submission.end,
        today,
    ))
}
