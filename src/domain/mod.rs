//! Domain layer: transaction records and relayed price bars.
//!
//! Pure data types with their validation rules. Nothing here touches the
//! database or the network.

pub mod candle;
pub mod trade_type;
pub mod transaction;
pub mod transaction_id;

pub use candle::DailyCandle;
pub use trade_type::TradeType;
pub use transaction::{CreateTransaction, NewTransaction, Transaction};
pub use transaction_id::TransactionId;
