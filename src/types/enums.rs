//! Enumeration types for the session generator
//!
//! This module contains the category label sets drawn for every research
//! event (currency pairs, indicators, intervals), the request type tag, and
//! the enumerations that select generator modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal written into every descriptive field of an end-of-visit event
pub const END_LABEL: &str = "END";

/// A fixed, ordered set of labels that a research event draws from
pub trait CategoryLabel: Copy + Eq + fmt::Debug + 'static {
    /// Human readable name of the category, used in errors and statistics
    const CATEGORY: &'static str;

    /// All labels in declaration order; weight tables are parallel to this
    fn all() -> &'static [Self];

    /// Label as written into the payload document
    fn label(&self) -> &'static str;
}

/// Kind of request an event represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    /// A research lookup
    #[serde(rename = "research")]
    Research,
    /// Sentinel closing a visit
    #[serde(rename = "END")]
    End,
}

impl RequestType {
    /// Literal tag for this request type
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Research => "research",
            RequestType::End => END_LABEL,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Major currency pairs a user researches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorPair {
    /// Euro / US dollar
    #[serde(rename = "EURUSD")]
    EurUsd,
    /// British pound / US dollar
    #[serde(rename = "GBPUSD")]
    GbpUsd,
    /// US dollar / Canadian dollar
    #[serde(rename = "USDCAD")]
    UsdCad,
    /// US dollar / Swiss franc
    #[serde(rename = "USDCHF")]
    UsdChf,
    /// US dollar / Japanese yen
    #[serde(rename = "USDJPY")]
    UsdJpy,
    /// Euro / British pound
    #[serde(rename = "EURGBP")]
    EurGbp,
    /// Euro / Swiss franc
    #[serde(rename = "EURCHF")]
    EurChf,
    /// Australian dollar / US dollar
    #[serde(rename = "AUDUSD")]
    AudUsd,
    /// Euro / Japanese yen
    #[serde(rename = "EURJPY")]
    EurJpy,
    /// British pound / Japanese yen
    #[serde(rename = "GBPJPY")]
    GbpJpy,
}

impl MajorPair {
    /// Every pair, in the order weight tables refer to them
    pub const ALL: [MajorPair; 10] = [
        MajorPair::EurUsd,
        MajorPair::GbpUsd,
        MajorPair::UsdCad,
        MajorPair::UsdChf,
        MajorPair::UsdJpy,
        MajorPair::EurGbp,
        MajorPair::EurChf,
        MajorPair::AudUsd,
        MajorPair::EurJpy,
        MajorPair::GbpJpy,
    ];
}

impl CategoryLabel for MajorPair {
    const CATEGORY: &'static str = "major_pair";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            MajorPair::EurUsd => "EURUSD",
            MajorPair::GbpUsd => "GBPUSD",
            MajorPair::UsdCad => "USDCAD",
            MajorPair::UsdChf => "USDCHF",
            MajorPair::UsdJpy => "USDJPY",
            MajorPair::EurGbp => "EURGBP",
            MajorPair::EurChf => "EURCHF",
            MajorPair::AudUsd => "AUDUSD",
            MajorPair::EurJpy => "EURJPY",
            MajorPair::GbpJpy => "GBPJPY",
        }
    }
}

impl fmt::Display for MajorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Technical indicators a user looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Moving average convergence/divergence
    #[serde(rename = "MACD")]
    Macd,
    /// Exponential moving average
    #[serde(rename = "EMA")]
    Ema,
    /// Moving average
    #[serde(rename = "MA")]
    Ma,
    /// Simple moving average
    #[serde(rename = "SMA")]
    Sma,
    /// Bollinger bands
    Bollinger,
    /// Fibonacci retracement
    Fibonacci,
}

impl Indicator {
    /// Every indicator, in the order weight tables refer to them
    pub const ALL: [Indicator; 6] = [
        Indicator::Macd,
        Indicator::Ema,
        Indicator::Ma,
        Indicator::Sma,
        Indicator::Bollinger,
        Indicator::Fibonacci,
    ];
}

impl CategoryLabel for Indicator {
    const CATEGORY: &'static str = "indicator";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            Indicator::Macd => "MACD",
            Indicator::Ema => "EMA",
            Indicator::Ma => "MA",
            Indicator::Sma => "SMA",
            Indicator::Bollinger => "Bollinger",
            Indicator::Fibonacci => "Fibonacci",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart intervals a user researches at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// Five seconds
    #[serde(rename = "5s")]
    FiveSeconds,
    /// One minute
    #[serde(rename = "1")]
    OneMinute,
    /// Thirty minutes
    #[serde(rename = "30")]
    ThirtyMinutes,
    /// One hour
    #[serde(rename = "1h")]
    OneHour,
    /// One day
    #[serde(rename = "1d")]
    OneDay,
    /// One month
    #[serde(rename = "1m")]
    OneMonth,
}

impl Interval {
    /// Every interval, in the order weight tables refer to them
    pub const ALL: [Interval; 6] = [
        Interval::FiveSeconds,
        Interval::OneMinute,
        Interval::ThirtyMinutes,
        Interval::OneHour,
        Interval::OneDay,
        Interval::OneMonth,
    ];
}

impl CategoryLabel for Interval {
    const CATEGORY: &'static str = "interval";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            Interval::FiveSeconds => "5s",
            Interval::OneMinute => "1",
            Interval::ThirtyMinutes => "30",
            Interval::OneHour => "1h",
            Interval::OneDay => "1d",
            Interval::OneMonth => "1m",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How record identifiers are handed out during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordIdScope {
    /// One identifier per visit, shared by all of its events
    #[default]
    Visit,
    /// A fresh identifier for every event
    Event,
}

impl fmt::Display for RecordIdScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIdScope::Visit => write!(f, "visit"),
            RecordIdScope::Event => write!(f, "event"),
        }
    }
}

/// Where visit user identifiers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UserSource {
    /// Generate a fresh identifier for every visit
    #[default]
    New,
    /// Draw from the configured pool of known users (repeat visitors)
    Existing,
}

impl fmt::Display for UserSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSource::New => write!(f, "new"),
            UserSource::Existing => write!(f, "existing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_payload_values() {
        let pairs: Vec<&str> = MajorPair::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            pairs,
            vec![
                "EURUSD", "GBPUSD", "USDCAD", "USDCHF", "USDJPY", "EURGBP", "EURCHF", "AUDUSD",
                "EURJPY", "GBPJPY"
            ]
        );

        let indicators: Vec<&str> = Indicator::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(indicators, vec!["MACD", "EMA", "MA", "SMA", "Bollinger", "Fibonacci"]);

        let intervals: Vec<&str> = Interval::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(intervals, vec!["5s", "1", "30", "1h", "1d", "1m"]);
    }

    #[test]
    fn test_serde_uses_labels() {
        for pair in MajorPair::ALL {
            assert_eq!(serde_json::to_string(&pair).unwrap(), format!("\"{}\"", pair.label()));
        }
        for indicator in Indicator::ALL {
            assert_eq!(
                serde_json::to_string(&indicator).unwrap(),
                format!("\"{}\"", indicator.label())
            );
        }
        for interval in Interval::ALL {
            assert_eq!(
                serde_json::to_string(&interval).unwrap(),
                format!("\"{}\"", interval.label())
            );
        }
        assert_eq!(serde_json::to_string(&RequestType::End).unwrap(), "\"END\"");
        assert_eq!(serde_json::to_string(&RequestType::Research).unwrap(), "\"research\"");
    }

    #[test]
    fn test_mode_enums() {
        assert_eq!(RecordIdScope::default(), RecordIdScope::Visit);
        assert_eq!(UserSource::default(), UserSource::New);
        assert_eq!(serde_json::to_string(&RecordIdScope::Event).unwrap(), "\"event\"");
        assert_eq!(serde_json::from_str::<UserSource>("\"existing\"").unwrap(), UserSource::Existing);
        assert_eq!(RequestType::End.to_string(), END_LABEL);
    }
}
