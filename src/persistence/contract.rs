//! Behaviour every [`TransactionStore`] must share.
//!
//! Each check starts by clearing the store, so a durable backend can be
//! reused across checks. Ids are compared relative to each other since a
//! database sequence does not restart at 1.

use super::TransactionStore;
use crate::domain::{NewTransaction, TradeType, Transaction, TransactionId};

pub(crate) fn new_tx(pair: &str, trade_type: TradeType) -> NewTransaction {
    NewTransaction {
        pair: pair.to_string(),
        trade_type,
        amount: 1000.0,
        price: 149.50,
        profit: None,
        opening_trade_id: None,
    }
}

async fn insert(store: &dyn TransactionStore, pair: &str) -> Transaction {
    let Ok(tx) = store.insert(new_tx(pair, TradeType::Buy)).await else {
        panic!("insert failed");
    };
    tx
}

async fn pairs(store: &dyn TransactionStore, skip: u64, limit: u64) -> Vec<String> {
    let Ok(page) = store.list(skip, limit).await else {
        panic!("list failed");
    };
    page.into_iter().map(|t| t.pair).collect()
}

async fn reset(store: &dyn TransactionStore) {
    let Ok(_) = store.delete_all().await else {
        panic!("delete_all failed");
    };
}

pub(crate) async fn insert_reads_back_every_field(store: &dyn TransactionStore) {
    reset(store).await;
    let opening = insert(store, "USD_JPY").await;

    let closing = NewTransaction {
        pair: "USD_JPY".to_string(),
        trade_type: TradeType::Sell,
        amount: 2500.0,
        price: 150.25,
        profit: Some(-12.5),
        opening_trade_id: Some(opening.id),
    };
    let Ok(stored) = store.insert(closing).await else {
        panic!("insert failed");
    };

    assert!(stored.id.get() > opening.id.get());
    assert!(stored.timestamp >= opening.timestamp);
    assert_eq!(stored.pair, "USD_JPY");
    assert_eq!(stored.trade_type, TradeType::Sell);
    assert_eq!(stored.amount, 2500.0);
    assert_eq!(stored.price, 150.25);
    assert_eq!(stored.profit, Some(-12.5));
    assert_eq!(stored.opening_trade_id, Some(opening.id));

    let Ok(listed) = store.list(0, 10).await else {
        panic!("list failed");
    };
    assert_eq!(listed.last(), Some(&stored));
}

pub(crate) async fn list_pages_in_insertion_order(store: &dyn TransactionStore) {
    reset(store).await;
    for pair in ["A", "B", "C", "D"] {
        insert(store, pair).await;
    }

    assert_eq!(pairs(store, 0, 100).await, ["A", "B", "C", "D"]);
    assert_eq!(pairs(store, 1, 2).await, ["B", "C"]);
    assert_eq!(pairs(store, 3, 10).await, ["D"]);
    assert!(pairs(store, 0, 0).await.is_empty());
}

pub(crate) async fn list_past_the_end_is_empty(store: &dyn TransactionStore) {
    reset(store).await;
    insert(store, "A").await;

    assert!(pairs(store, 5, 10).await.is_empty());
    assert!(pairs(store, u64::MAX, u64::MAX).await.is_empty());
}

pub(crate) async fn delete_all_reports_count_and_is_idempotent(store: &dyn TransactionStore) {
    reset(store).await;
    insert(store, "A").await;
    insert(store, "B").await;

    assert_eq!(store.delete_all().await.ok(), Some(2));
    assert!(pairs(store, 0, 100).await.is_empty());
    assert_eq!(store.delete_all().await.ok(), Some(0));
}

pub(crate) async fn ids_are_not_reused_after_clear(store: &dyn TransactionStore) {
    reset(store).await;
    insert(store, "A").await;
    let last = insert(store, "B").await;
    reset(store).await;

    let next = insert(store, "C").await;
    assert!(next.id.get() > last.id.get());
    assert_ne!(next.id, TransactionId::new(1));
    assert_eq!(pairs(store, 0, 100).await, ["C"]);
}

pub(crate) async fn ping_succeeds(store: &dyn TransactionStore) {
    assert!(store.ping().await.is_ok());
}
