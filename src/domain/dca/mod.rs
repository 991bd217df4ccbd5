pub mod format;
pub mod repositories;
pub mod services;

pub use format::{format_btc, format_usd};
pub use repositories::{DateLimits, PriceHistory};
pub use services::{AccumulationSeries, DcaOutcome, accumulation_series, run_dca};
