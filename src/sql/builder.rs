//! Builds SELECT, INSERT, UPDATE and DELETE statements for an [`Entity`].
//! Placeholders are positional (`?`); callers bind in column order.

use crate::model::Entity;

/// Quote identifier for SQLite. Needed for `order`, which is a keyword.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// Full-table scan in primary-key order.
pub fn select_all<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(E::COLUMNS),
        quoted(E::TABLE),
        quoted("id")
    )
}

/// Row count of the entity's table.
pub fn count<E: Entity>() -> String {
    format!("SELECT COUNT(*) FROM {}", quoted(E::TABLE))
}

/// SELECT by primary key. Caller binds the id.
pub fn select_by_id<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(E::COLUMNS),
        quoted(E::TABLE),
        quoted("id")
    )
}

/// INSERT of every column, returning the stored row.
pub fn insert<E: Entity>() -> String {
    let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(E::TABLE),
        column_list(E::COLUMNS),
        placeholders,
        column_list(E::COLUMNS)
    )
}

/// UPDATE of the updatable columns. Binds: changes in column order, then the id.
pub fn update<E: Entity>() -> String {
    let set_clause = E::UPDATABLE
        .iter()
        .map(|c| format!("{} = ?", quoted(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
        quoted(E::TABLE),
        set_clause,
        quoted("id"),
        column_list(E::COLUMNS)
    )
}

/// DELETE by primary key, returning the removed row.
pub fn delete<E: Entity>() -> String {
    format!(
        "DELETE FROM {} WHERE {} = ? RETURNING {}",
        quoted(E::TABLE),
        quoted("id"),
        column_list(E::COLUMNS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Offer, Order, User};

    #[test]
    fn quotes_keywords_and_embedded_quotes() {
        assert_eq!(quoted("order"), "\"order\"");
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn select_all_orders_by_id() {
        assert_eq!(
            select_all::<Offer>(),
            r#"SELECT "id", "order_id", "executor_id" FROM "offer" ORDER BY "id""#
        );
    }

    #[test]
    fn count_quotes_the_table() {
        assert_eq!(count::<Order>(), r#"SELECT COUNT(*) FROM "order""#);
    }

    #[test]
    fn insert_has_one_placeholder_per_column() {
        let sql = insert::<Order>();
        assert!(sql.starts_with(r#"INSERT INTO "order" ("id", "name", "description""#));
        assert_eq!(sql.matches('?').count(), Order::COLUMNS.len());
    }

    #[test]
    fn user_update_leaves_id_and_email_alone() {
        let sql = update::<User>();
        assert_eq!(
            sql,
            concat!(
                r#"UPDATE "user" SET "first_name" = ?, "last_name" = ?, "age" = ?, "role" = ?, "phone" = ? "#,
                r#"WHERE "id" = ? RETURNING "id", "first_name", "last_name", "age", "email", "role", "phone""#
            )
        );
        let set_clause = sql.split(" WHERE ").next().unwrap_or_default();
        assert!(!set_clause.contains("\"email\""));
        assert!(!set_clause.contains("\"id\""));
    }

    #[test]
    fn delete_targets_primary_key() {
        assert_eq!(
            delete::<Offer>(),
            r#"DELETE FROM "offer" WHERE "id" = ? RETURNING "id", "order_id", "executor_id""#
        );
    }
}
