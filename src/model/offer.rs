use super::{Entity, Payload, SqliteQuery};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const COLUMNS: &[&str] = &["id", "order_id", "executor_id"];
const UPDATABLE: &[&str] = &["order_id", "executor_id"];

/// An executor's bid on an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OfferChanges {
    pub order_id: i64,
    pub executor_id: i64,
}

impl Payload for Offer {
    const REQUIRED: &'static [&'static str] = COLUMNS;
}

impl Payload for OfferChanges {
    const REQUIRED: &'static [&'static str] = UPDATABLE;
}

impl Entity for Offer {
    const TABLE: &'static str = "offer";
    const LABEL: &'static str = "OFFER";
    const COLUMNS: &'static [&'static str] = COLUMNS;
    const UPDATABLE: &'static [&'static str] = UPDATABLE;

    type Changes = OfferChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_all<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.id).bind(self.order_id).bind(self.executor_id)
    }

    fn bind_changes<'q>(changes: &'q OfferChanges, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(changes.order_id).bind(changes.executor_id)
    }
}
