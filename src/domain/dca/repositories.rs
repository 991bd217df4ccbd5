use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Repository seam for historical BTC prices - one USD close per calendar day.
/// None means the source simply has no row for that date; the strategy walk
/// skips such days instead of failing.
pub trait PriceHistory {
    fn price_on(&self, date: NaiveDate) -> Option<f64>;

    /// Earliest date the source covers, used as the form's minimum date hint.
    fn oldest_date(&self) -> Option<NaiveDate>;

    /// Latest date the source covers, used as the form's maximum date hint.
    fn newest_date(&self) -> Option<NaiveDate>;
}

/// Coverage bounds of the price history, served to the form so its date
/// inputs can constrain what the user may pick. Both ends are None for an
/// empty source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLimits {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl DateLimits {
    pub fn covering(history: &dyn PriceHistory) -> Self {
        Self {
            min_date: history.oldest_date(),
            max_date: history.newest_date(),
        }
    }
}
