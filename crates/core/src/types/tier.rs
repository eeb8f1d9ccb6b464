//! Loyalty tier classification.

use core::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loyalty tier derived from annual spend and purchase recency.
///
/// The tier is never stored. It is recomputed against the current date every
/// time a record is shaped into a response, so the same record can answer
/// differently as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tier {
    /// Annual spend of at least 10,000 with a purchase in the last 6 months.
    Platinum,
    /// Annual spend of at least 1,000 (below 10,000) with a purchase in the
    /// last 12 months.
    Gold,
    /// Everyone else, including customers with no recorded spend.
    #[default]
    Silver,
}

impl Tier {
    /// Minimum annual spend for the Platinum band.
    pub const PLATINUM_MIN_SPEND: u32 = 10_000;
    /// Minimum annual spend for the Gold band.
    pub const GOLD_MIN_SPEND: u32 = 1_000;
    /// Maximum whole months since the last purchase for Platinum.
    pub const PLATINUM_RECENCY_MONTHS: i64 = 6;
    /// Maximum whole months since the last purchase for Gold.
    pub const GOLD_RECENCY_MONTHS: i64 = 12;

    /// Classify a customer from its spend and last purchase date, evaluated
    /// against `today`.
    ///
    /// Rules are checked in strict priority order (first match wins):
    /// Platinum, then Gold, then Silver as the default. A missing spend
    /// classifies as Silver without consulting the date; a missing purchase
    /// date disqualifies both paid bands.
    #[must_use]
    pub fn classify(
        annual_spend: Option<Decimal>,
        last_purchase_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let Some(spend) = annual_spend else {
            return Self::Silver;
        };
        let Some(purchased) = last_purchase_date else {
            return Self::Silver;
        };

        let months = whole_months_between(purchased, today);
        let platinum_floor = Decimal::from(Self::PLATINUM_MIN_SPEND);
        let gold_floor = Decimal::from(Self::GOLD_MIN_SPEND);

        if spend >= platinum_floor && months <= Self::PLATINUM_RECENCY_MONTHS {
            Self::Platinum
        } else if spend >= gold_floor && spend < platinum_floor && months <= Self::GOLD_RECENCY_MONTHS
        {
            Self::Gold
        } else {
            Self::Silver
        }
    }

    /// Returns the tier name as presented on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole calendar months from `from` to `to`, truncated toward zero.
///
/// A date 6 months and 29 days in the past is 6 whole months away, not 7.
/// Month-end pairs follow the same rule: Jan 31 to Feb 28 is 0 whole months.
#[must_use]
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    // Day-of-month packed into a 32-wide slot per month so a single
    // truncating division yields whole months.
    fn packed(date: NaiveDate) -> i64 {
        (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
    }

    (packed(to) - packed(from)) / 32
}
