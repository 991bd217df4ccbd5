use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use dca_calculator::domain::dca::format_usd;
use dca_calculator::domain::form::FormInputs;
use dca_calculator::infrastructure::{prices::PriceBook, spot::FixedSpot};
use dca_calculator::server::{AppState, build_router, handle_calculate, handle_chart};
use serde_json::Value;
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn state_with_spot(spot: Option<f64>) -> AppState {
    let book = PriceBook::from_json_str(
        r#"{
            "2023-01-01": 16547.5,
            "2023-01-02": 16688.4,
            "2023-01-03": 16679.9
        }"#,
    )
    .expect("valid book");

    AppState {
        prices: Arc::new(book),
        spot: Arc::new(FixedSpot(spot)),
    }
}

fn daily_inputs() -> FormInputs {
    FormInputs::new("100", "daily", "2023-01-01", "2023-01-03")
}

#[tokio::test]
async fn page_shell_and_wasm_bundle_are_both_served() {
    // The shell imports /pkg/dca_calculator.js; a router that cannot serve
    // it delivers a page whose form never boots.
    let asset_dir = std::env::temp_dir().join("dca-server-pkg-fixture");
    std::fs::create_dir_all(&asset_dir).expect("fixture dir");
    std::fs::write(
        asset_dir.join("dca_calculator.js"),
        "export default function init() {}",
    )
    .expect("fixture bundle");

    let app = build_router(state_with_spot(Some(65000.0)), &asset_dir);

    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get("/pkg/dca_calculator.js")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn limits_reports_the_price_coverage() {
    let app = build_router(state_with_spot(None), "./pkg");

    let response = app
        .oneshot(Request::get("/limits").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let limits: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(limits["min_date"], "2023-01-01");
    assert_eq!(limits["max_date"], "2023-01-03");
}

#[tokio::test]
async fn calculate_returns_the_eight_formatted_fields() {
    let state = state_with_spot(Some(65000.0));
    let response = handle_calculate(&state, &daily_inputs(), date(2024, 6, 1))
        .await
        .expect("calculation succeeds");

    let expected_btc = 100.0 / 16547.5 + 100.0 / 16688.4 + 100.0 / 16679.9;
    assert_eq!(response.total_investment, "300.00$");
    assert_eq!(response.total_bitcoin, format!("{expected_btc:.5} BTC"));
    assert_eq!(
        response.avg_cost,
        format!("{}$", format_usd(300.0 / expected_btc))
    );
    assert_eq!(
        response.current_value,
        format!("{}$", format_usd(65000.0 * expected_btc))
    );
    assert_eq!(response.profit, format_usd(65000.0 * expected_btc - 300.0));
    assert_eq!(
        response.value_on_end_date,
        format_usd(16679.9 * expected_btc)
    );
    assert_eq!(
        response.end_date_profit,
        format_usd(16679.9 * expected_btc - 300.0)
    );
    assert_eq!(response.current_price, "65 000.00$");
}

#[tokio::test]
async fn calculate_without_a_spot_quote_is_rejected() {
    // The error body carries no current_price, which the form controller
    // surfaces as the upstream-unavailable message.
    let state = state_with_spot(None);
    let (status, body) = handle_calculate(&state, &daily_inputs(), date(2024, 6, 1))
        .await
        .expect_err("no spot quote");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.0["error"].as_str().expect("error field").contains("BTC price"));
}

#[tokio::test]
async fn calculate_rejects_unparseable_fields() {
    let state = state_with_spot(Some(65000.0));

    let bad_amount = FormInputs::new("lots", "daily", "2023-01-01", "2023-01-03");
    let (status, body) = handle_calculate(&state, &bad_amount, date(2024, 6, 1))
        .await
        .expect_err("bad amount");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.0["error"].as_str().expect("error field").contains("investment_value"));

    let bad_cadence = FormInputs::new("100", "yearly", "2023-01-01", "2023-01-03");
    let (status, _) = handle_calculate(&state, &bad_cadence, date(2024, 6, 1))
        .await
        .expect_err("bad cadence");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_date = FormInputs::new("100", "daily", "01-01-2023", "2023-01-03");
    let (status, _) = handle_calculate(&state, &bad_date, date(2024, 6, 1))
        .await
        .expect_err("bad date");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculate_rejects_a_priceless_end_date() {
    let state = state_with_spot(Some(65000.0));
    let inputs = FormInputs::new("100", "daily", "2023-01-01", "2023-01-09");
    let (status, body) = handle_calculate(&state, &inputs, date(2024, 6, 1))
        .await
        .expect_err("no end close");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.0["error"].as_str().expect("error field").contains("end date"));
}

#[tokio::test]
async fn chart_returns_the_accumulation_series() {
    let state = state_with_spot(Some(65000.0));
    let series = handle_chart(&state, &daily_inputs(), date(2024, 6, 1))
        .await
        .expect("series");

    assert_eq!(
        series.dates,
        vec![date(2023, 1, 1), date(2023, 1, 2), date(2023, 1, 3)]
    );
    assert_eq!(series.investments, vec![100.0, 200.0, 300.0]);

    // Dates serialize as ISO strings for the plotting client.
    let json = serde_json::to_value(&series).expect("serializes");
    assert_eq!(json["dates"][0], "2023-01-01");
}

#[tokio::test]
async fn chart_rejects_what_calculate_rejects() {
    let state = state_with_spot(Some(65000.0));
    let inputs = FormInputs::new("", "daily", "2023-01-01", "2023-01-03");
    let (status, _) = handle_chart(&state, &inputs, date(2024, 6, 1))
        .await
        .expect_err("empty amount never parses");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
