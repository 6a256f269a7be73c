//! Database row model for the `transactions` table.

use chrono::{DateTime, Utc};

use crate::domain::{TradeType, Transaction, TransactionId};
use crate::error::TradeLogError;

/// A raw row from the `transactions` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Traded instrument.
    pub pair: String,
    /// Direction label as stored.
    pub trade_type: String,
    /// Trade quantity.
    pub amount: f64,
    /// Execution price.
    pub price: f64,
    /// Server-side insertion timestamp.
    pub timestamp: DateTime<Utc>,
    /// Realized profit of a closing trade.
    pub profit: Option<f64>,
    /// Soft reference to the opening trade.
    pub opening_trade_id: Option<i64>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = TradeLogError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let trade_type = row.trade_type.parse::<TradeType>().map_err(|_| {
            TradeLogError::Internal(format!(
                "transaction {} has unreadable trade_type {:?}",
                row.id, row.trade_type
            ))
        })?;

        Ok(Self {
            id: TransactionId::new(row.id),
            pair: row.pair,
            trade_type,
            amount: row.amount,
            price: row.price,
            timestamp: row.timestamp,
            profit: row.profit,
            opening_trade_id: row.opening_trade_id.map(TransactionId::new),
        })
    }
}
