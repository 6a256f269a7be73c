//! Trade direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TradeLogError;

/// Direction of a recorded trade.
///
/// Serialized as `"buy"` / `"sell"`. Parsing is case-insensitive and also
/// accepts the order-ticket labels used by the simulator front end:
/// `ASK` (the buy button) and `BID` (the sell button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Opens or extends a long exposure.
    Buy,
    /// Opens or extends a short exposure.
    Sell,
}

impl TradeType {
    /// Canonical lowercase label, as stored in the `trade_type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = TradeLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "ask" => Ok(Self::Buy),
            "sell" | "bid" => Ok(Self::Sell),
            other => Err(TradeLogError::Validation(format!(
                "trade_type must be one of buy, sell (got {other:?})"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels() {
        assert_eq!("buy".parse::<TradeType>().ok(), Some(TradeType::Buy));
        assert_eq!("sell".parse::<TradeType>().ok(), Some(TradeType::Sell));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Buy ".parse::<TradeType>().ok(), Some(TradeType::Buy));
        assert_eq!("SELL".parse::<TradeType>().ok(), Some(TradeType::Sell));
    }

    #[test]
    fn accepts_ticket_labels() {
        assert_eq!("ASK".parse::<TradeType>().ok(), Some(TradeType::Buy));
        assert_eq!("BID".parse::<TradeType>().ok(), Some(TradeType::Sell));
    }

    #[test]
    fn rejects_unknown_labels() {
        let result = "hold".parse::<TradeType>();
        assert!(matches!(result, Err(TradeLogError::Validation(_))));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TradeType::Sell).ok().as_deref(),
            Some("\"sell\"")
        );
    }
}
