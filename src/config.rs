//! Encoding configuration for CSV export

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

/// Strategy for rendering date-time cells
#[derive(Clone)]
pub enum DateStrategy {
    /// Fractional seconds since the Unix epoch, as a decimal string
    SecondsSinceEpoch,
    /// UTC ISO-8601 / RFC 3339 string with whole-second precision,
    /// e.g. `2024-01-01T00:00:00Z`
    Iso8601,
    /// A chrono strftime format string, e.g. `%d %b %Y`
    Formatted(String),
    /// A caller-supplied formatting function
    Custom(Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync>),
}

impl DateStrategy {
    /// Render a date-time according to this strategy
    pub fn format(&self, dt: DateTime<Utc>) -> String {
        match self {
            DateStrategy::SecondsSinceEpoch => {
                let seconds =
                    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
                seconds.to_string()
            }
            DateStrategy::Iso8601 => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            DateStrategy::Formatted(pattern) => dt.format(pattern).to_string(),
            DateStrategy::Custom(f) => f(dt),
        }
    }
}

impl fmt::Debug for DateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateStrategy::SecondsSinceEpoch => write!(f, "SecondsSinceEpoch"),
            DateStrategy::Iso8601 => write!(f, "Iso8601"),
            DateStrategy::Formatted(pattern) => f.debug_tuple("Formatted").field(pattern).finish(),
            DateStrategy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Strategy for rendering boolean cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolStrategy {
    /// `true` / `false`
    TrueFalse,
    /// `TRUE` / `FALSE`
    TrueFalseUppercase,
    /// `yes` / `no`
    YesNo,
    /// `YES` / `NO`
    YesNoUppercase,
    /// `1` / `0`
    Integer,
    /// Caller-supplied token pair
    Custom {
        true_token: String,
        false_token: String,
    },
}

impl BoolStrategy {
    /// The (true, false) token pair for this strategy
    pub fn tokens(&self) -> (&str, &str) {
        match self {
            BoolStrategy::TrueFalse => ("true", "false"),
            BoolStrategy::TrueFalseUppercase => ("TRUE", "FALSE"),
            BoolStrategy::YesNo => ("yes", "no"),
            BoolStrategy::YesNoUppercase => ("YES", "NO"),
            BoolStrategy::Integer => ("1", "0"),
            BoolStrategy::Custom {
                true_token,
                false_token,
            } => (true_token, false_token),
        }
    }
}

/// Configuration for encoding cell values
///
/// Immutable once constructed; a `Configuration` may be shared freely across
/// concurrent export calls.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Strategy for rendering date-time cells
    pub date_strategy: DateStrategy,
    /// Strategy for rendering boolean cells
    pub bool_strategy: BoolStrategy,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            date_strategy: DateStrategy::Iso8601,
            bool_strategy: BoolStrategy::TrueFalse,
        }
    }
}

impl Configuration {
    /// Create a configuration with the default strategies
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date-time rendering strategy
    pub fn with_date_strategy(mut self, strategy: DateStrategy) -> Self {
        self.date_strategy = strategy;
        self
    }

    /// Set the boolean rendering strategy
    pub fn with_bool_strategy(mut self, strategy: BoolStrategy) -> Self {
        self.bool_strategy = strategy;
        self
    }
}
