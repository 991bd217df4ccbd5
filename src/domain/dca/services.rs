use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::repositories::PriceHistory;
use crate::domain::errors::AppError;
use crate::domain::form::PurchaseInterval;
use crate::domain::logging::{LogComponent, get_logger};

/// Raw numbers for one strategy run. Formatting for display happens at the
/// API edge, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct DcaOutcome {
    pub total_investment: f64,
    pub total_bitcoin: f64,
    pub avg_cost: f64,
    pub current_value: f64,
    pub profit: f64,
    pub value_on_end_date: f64,
    pub end_date_profit: f64,
    /// Today's BTC/USD quote, None when the upstream could not provide one.
    pub current_price: Option<f64>,
}

/// Walk the purchase schedule from `start` to `end` inclusive, buying
/// `investment_value` USD of BTC at each step. Today's purchase uses the
/// live `spot` quote, every other day the historical close. Days without a
/// price are skipped, they neither invest nor buy.
///
/// The end-of-period valuation needs the historical close for `end`; a gap
/// there is a hard error because the result fields cannot be computed.
pub fn run_dca(
    history: &dyn PriceHistory,
    spot: Option<f64>,
    investment_value: f64,
    interval: PurchaseInterval,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<DcaOutcome, AppError> {
    let mut total_investment = 0.0;
    let mut total_bitcoin = 0.0;

    let mut date = start;
    while date <= end {
        let price = if date == today {
            spot
        } else {
            history.price_on(date)
        };

        match price {
            Some(price) if price > 0.0 => {
                total_investment += investment_value;
                total_bitcoin += investment_value / price;
            }
            _ => {
                get_logger().warn(
                    LogComponent::Dca("Schedule"),
                    &format!("skipping {date}: no price available"),
                );
            }
        }

        date = date + Duration::days(interval.step_days() as i64);
    }

    let end_price = history.price_on(end).ok_or_else(|| {
        AppError::PriceDataError(format!("no historical price for end date {end}"))
    })?;
    let value_on_end_date = total_bitcoin * end_price;
    let end_date_profit = value_on_end_date - total_investment;

    let (current_value, profit) = match spot {
        Some(price) => (
            price * total_bitcoin,
            price * total_bitcoin - total_investment,
        ),
        None => (0.0, 0.0),
    };

    let avg_cost = if total_bitcoin > 0.0 {
        total_investment / total_bitcoin
    } else {
        0.0
    };

    get_logger().info(
        LogComponent::Dca("Strategy"),
        &format!(
            "📈 invested {total_investment:.2}$ -> {total_bitcoin:.5} BTC (avg {avg_cost:.2}$)"
        ),
    );

    Ok(DcaOutcome {
        total_investment,
        total_bitcoin,
        avg_cost,
        current_value,
        profit,
        value_on_end_date,
        end_date_profit,
        current_price: spot,
    })
}

/// Cumulative series behind the `/chart` view: one point per priced purchase
/// day, parallel vectors for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccumulationSeries {
    pub dates: Vec<NaiveDate>,
    pub investments: Vec<f64>,
    pub total_bitcoins: Vec<f64>,
}

pub fn accumulation_series(
    history: &dyn PriceHistory,
    spot: Option<f64>,
    investment_value: f64,
    interval: PurchaseInterval,
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> AccumulationSeries {
    let mut series = AccumulationSeries::default();
    let mut total_investment = 0.0;
    let mut total_bitcoin = 0.0;

    let mut date = start;
    while date <= end {
        let price = if date == today {
            spot
        } else {
            history.price_on(date)
        };

        if let Some(price) = price.filter(|price| *price > 0.0) {
            total_investment += investment_value;
            total_bitcoin += investment_value / price;

            series.dates.push(date);
            series.investments.push(total_investment);
            series.total_bitcoins.push(total_bitcoin);
        }

        date = date + Duration::days(interval.step_days() as i64);
    }

    series
}
