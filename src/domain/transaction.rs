//! Transaction records: raw creation input, validated input, stored record.
//!
//! Three plain structs instead of a schema hierarchy:
//!
//! - [`CreateTransaction`] is what a caller submits (trade type still text).
//! - [`NewTransaction`] is the validated input handed to the store.
//! - [`Transaction`] is the full stored record including the
//!   store-assigned `id` and `timestamp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{TradeType, TransactionId};
use crate::error::TradeLogError;

/// Creation input exactly as received from a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransaction {
    /// Traded instrument, e.g. `"USD_JPY"`.
    pub pair: String,
    /// Trade direction label (`buy`/`sell`, or the `ASK`/`BID` ticket labels).
    pub trade_type: String,
    /// Trade quantity.
    pub amount: f64,
    /// Execution price.
    pub price: f64,
    /// Realized profit, set only by a closing trade.
    pub profit: Option<f64>,
    /// Id of the trade being closed, if any.
    pub opening_trade_id: Option<TransactionId>,
}

impl CreateTransaction {
    /// Checks every field and produces the store input.
    ///
    /// `opening_trade_id` is a soft reference: it must be a positive id but
    /// is not looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::Validation`] naming the first offending field.
    pub fn validate(self) -> Result<NewTransaction, TradeLogError> {
        if self.pair.trim().is_empty() {
            return Err(TradeLogError::Validation(
                "pair must not be empty".to_string(),
            ));
        }
        let trade_type = self.trade_type.parse::<TradeType>()?;
        ensure_positive("amount", self.amount)?;
        ensure_positive("price", self.price)?;
        if let Some(profit) = self.profit
            && !profit.is_finite()
        {
            return Err(TradeLogError::Validation(
                "profit must be a finite number".to_string(),
            ));
        }
        if let Some(opening) = self.opening_trade_id
            && opening.get() <= 0
        {
            return Err(TradeLogError::Validation(format!(
                "opening_trade_id must be a positive id (got {opening})"
            )));
        }

        Ok(NewTransaction {
            pair: self.pair,
            trade_type,
            amount: self.amount,
            price: self.price,
            profit: self.profit,
            opening_trade_id: self.opening_trade_id,
        })
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<(), TradeLogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TradeLogError::Validation(format!(
            "{field} must be a positive number"
        )))
    }
}

/// Validated creation input. Carries no `id` or `timestamp`; both are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Traded instrument.
    pub pair: String,
    /// Trade direction.
    pub trade_type: TradeType,
    /// Trade quantity.
    pub amount: f64,
    /// Execution price.
    pub price: f64,
    /// Realized profit of a closing trade.
    pub profit: Option<f64>,
    /// Soft reference to the trade being closed.
    pub opening_trade_id: Option<TransactionId>,
}

impl NewTransaction {
    /// Attaches the store-assigned fields, producing the stored record.
    #[must_use]
    pub fn into_stored(self, id: TransactionId, timestamp: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            pair: self.pair,
            trade_type: self.trade_type,
            amount: self.amount,
            price: self.price,
            timestamp,
            profit: self.profit,
            opening_trade_id: self.opening_trade_id,
        }
    }
}

/// A stored trade record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Store-assigned, strictly increasing id.
    #[schema(value_type = i64, example = 1)]
    pub id: TransactionId,
    /// Traded instrument.
    #[schema(example = "USD_JPY")]
    pub pair: String,
    /// Trade direction.
    pub trade_type: TradeType,
    /// Trade quantity.
    #[schema(example = 1000.0)]
    pub amount: f64,
    /// Execution price.
    #[schema(example = 149.5)]
    pub price: f64,
    /// Insertion time, assigned once by the store.
    pub timestamp: DateTime<Utc>,
    /// Realized profit, present only on closing trades.
    pub profit: Option<f64>,
    /// Id of the trade this one closes.
    #[schema(value_type = Option<i64>)]
    pub opening_trade_id: Option<TransactionId>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn input() -> CreateTransaction {
        CreateTransaction {
            pair: "USD_JPY".to_string(),
            trade_type: "buy".to_string(),
            amount: 1000.0,
            price: 149.50,
            profit: None,
            opening_trade_id: None,
        }
    }

    #[test]
    fn valid_input_passes_through() {
        let Ok(new) = input().validate() else {
            panic!("expected valid input");
        };
        assert_eq!(new.pair, "USD_JPY");
        assert_eq!(new.trade_type, TradeType::Buy);
        assert!(new.profit.is_none());
        assert!(new.opening_trade_id.is_none());
    }

    #[test]
    fn closing_trade_keeps_optional_fields() {
        let closing = CreateTransaction {
            trade_type: "BID".to_string(),
            profit: Some(-2500.0),
            opening_trade_id: Some(TransactionId::new(1)),
            ..input()
        };
        let Ok(new) = closing.validate() else {
            panic!("expected valid input");
        };
        assert_eq!(new.trade_type, TradeType::Sell);
        assert_eq!(new.profit, Some(-2500.0));
        assert_eq!(new.opening_trade_id, Some(TransactionId::new(1)));
    }

    #[test]
    fn blank_pair_is_rejected() {
        let bad = CreateTransaction {
            pair: "   ".to_string(),
            ..input()
        };
        assert!(matches!(bad.validate(), Err(TradeLogError::Validation(_))));
    }

    #[test]
    fn unknown_trade_type_is_rejected() {
        let bad = CreateTransaction {
            trade_type: "short".to_string(),
            ..input()
        };
        assert!(matches!(bad.validate(), Err(TradeLogError::Validation(_))));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let bad = CreateTransaction {
                amount,
                ..input()
            };
            assert!(bad.validate().is_err(), "amount {amount} accepted");
        }
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let bad = CreateTransaction {
            price: 0.0,
            ..input()
        };
        let Err(err) = bad.validate() else {
            panic!("expected validation error");
        };
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn non_finite_profit_is_rejected() {
        let bad = CreateTransaction {
            profit: Some(f64::NAN),
            ..input()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn dangling_opening_trade_id_is_accepted() {
        let soft = CreateTransaction {
            opening_trade_id: Some(TransactionId::new(9_999)),
            ..input()
        };
        assert!(soft.validate().is_ok());
    }

    #[test]
    fn zero_opening_trade_id_is_rejected() {
        let bad = CreateTransaction {
            opening_trade_id: Some(TransactionId::new(0)),
            ..input()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn into_stored_attaches_generated_fields() {
        let Ok(new) = input().validate() else {
            panic!("expected valid input");
        };
        let now = Utc::now();
        let stored = new.into_stored(TransactionId::new(3), now);
        assert_eq!(stored.id, TransactionId::new(3));
        assert_eq!(stored.timestamp, now);
        assert_eq!(stored.price, 149.50);
    }
}
