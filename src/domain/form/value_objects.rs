use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - one submission's worth of form fields, exactly as typed.
/// Lifetime is a single calculate action; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub investment_value: String,
    pub repeat_purchase: String,
    pub start_date: String,
    pub end_date: String,
}

impl FormInputs {
    pub fn new(
        investment_value: impl Into<String>,
        repeat_purchase: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            investment_value: investment_value.into(),
            repeat_purchase: repeat_purchase.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// The single local check the form performs before trusting any response.
    /// The literal "NULL" counts as empty, same as a blank field.
    pub fn has_valid_amount(&self) -> bool {
        !self.investment_value.is_empty() && self.investment_value != "NULL"
    }

    /// `/chart` link carrying the submitted values as-is - plain interpolation,
    /// no extra URL-encoding beyond what the fields already contain.
    pub fn chart_link(&self) -> String {
        format!(
            "/chart?investment_value={}&repeat_purchase={}&start_date={}&end_date={}",
            self.investment_value, self.repeat_purchase, self.start_date, self.end_date
        )
    }
}

/// Value Object - purchase cadence; wire form matches the form's select options
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum PurchaseInterval {
    #[strum(serialize = "daily")]
    #[serde(rename = "daily")]
    Daily,

    #[strum(serialize = "weekly")]
    #[serde(rename = "weekly")]
    Weekly,

    #[strum(serialize = "every_two_weeks")]
    #[serde(rename = "every_two_weeks")]
    EveryTwoWeeks,

    #[strum(serialize = "monthly")]
    #[serde(rename = "monthly")]
    Monthly,
}

impl PurchaseInterval {
    pub fn wire_str(&self) -> &str {
        self.as_ref()
    }

    /// Days between two purchases. Monthly is four weeks, matching the
    /// schedule the calculator has always used.
    pub fn step_days(&self) -> u64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::EveryTwoWeeks => 14,
            Self::Monthly => 28,
        }
    }
}
