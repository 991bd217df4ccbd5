use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;

use crate::domain::dca::repositories::PriceHistory;

/// In-memory stand-in for the price spreadsheet the calculator used to read:
/// a JSON object keyed by ISO date, `{"2023-01-01": 16547.5, ...}`.
pub struct PriceBook {
    prices: HashMap<NaiveDate, f64>,
}

impl PriceBook {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read price file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse price file '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let parsed: HashMap<String, f64> = serde_json::from_str(raw)?;

        let mut prices = HashMap::with_capacity(parsed.len());
        for (date, price) in parsed {
            let date = date
                .parse::<NaiveDate>()
                .with_context(|| format!("bad date key '{date}', expected YYYY-MM-DD"))?;
            prices.insert(date, price);
        }

        Ok(Self { prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceHistory for PriceBook {
    fn price_on(&self, date: NaiveDate) -> Option<f64> {
        self.prices.get(&date).copied()
    }

    fn oldest_date(&self) -> Option<NaiveDate> {
        self.prices.keys().min().copied()
    }

    fn newest_date(&self) -> Option<NaiveDate> {
        self.prices.keys().max().copied()
    }
}
