//! Generic CRUD execution against SQLite. Every mutation is a single autocommitted statement.

use crate::error::AppError;
use crate::model::Entity;
use crate::sql::{count, delete, insert, select_all, select_by_id, update};
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// Every row of the entity's table, ordered by id.
    pub async fn list_all<E: Entity>(pool: &SqlitePool) -> Result<Vec<E>, AppError> {
        let sql = select_all::<E>();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn count<E: Entity>(pool: &SqlitePool) -> Result<i64, AppError> {
        let sql = count::<E>();
        tracing::debug!(sql = %sql, "query");
        let n = sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?;
        Ok(n)
    }

    pub async fn get_by_id<E: Entity>(pool: &SqlitePool, id: i64) -> Result<E, AppError> {
        let sql = select_by_id::<E>();
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(E::describe(id)))
    }

    /// Insert one row with the caller's id. A taken id is a conflict.
    pub async fn create<E: Entity>(pool: &SqlitePool, entity: &E) -> Result<E, AppError> {
        let sql = insert::<E>();
        tracing::debug!(sql = %sql, id = entity.id(), "query");
        let row = entity
            .bind_all(sqlx::query(&sql))
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::from_write(e, E::describe(entity.id())))?;
        Ok(E::from_row(&row)?)
    }

    /// Overwrite the updatable columns of row `id`. Returns the updated row.
    pub async fn update<E: Entity>(
        pool: &SqlitePool,
        id: i64,
        changes: &E::Changes,
    ) -> Result<E, AppError> {
        let sql = update::<E>();
        tracing::debug!(sql = %sql, id, "query");
        let row = E::bind_changes(changes, sqlx::query(&sql))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(E::describe(id)))?;
        Ok(E::from_row(&row)?)
    }

    /// Remove row `id`. Returns the removed row.
    pub async fn delete<E: Entity>(pool: &SqlitePool, id: i64) -> Result<E, AppError> {
        let sql = delete::<E>();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(E::describe(id)))?;
        Ok(E::from_row(&row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::model::{Offer, OfferChanges, Order, OrderChanges, User, UserChanges};
    use crate::store;

    async fn empty_pool() -> SqlitePool {
        let pool = store::connect(&Settings::default()).await.unwrap();
        store::reset(&pool).await.unwrap();
        pool
    }

    fn ann() -> User {
        User {
            id: 1,
            first_name: "Ann".into(),
            last_name: "Li".into(),
            age: 30,
            email: "a@x.com".into(),
            role: "customer".into(),
            phone: "555".into(),
        }
    }

    fn gig() -> Order {
        Order {
            id: 10,
            name: "Paint fence".into(),
            description: "Two coats".into(),
            start_date: "01/01/2024".into(),
            end_date: "02/01/2024".into(),
            address: "1 Main St".into(),
            price: 700,
            customer_id: 1,
            executor_id: 2,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_payload() {
        let pool = empty_pool().await;
        let created = CrudService::create(&pool, &ann()).await.unwrap();
        assert_eq!(created, ann());
        assert_eq!(CrudService::get_by_id::<User>(&pool, 1).await.unwrap(), ann());

        CrudService::create(&pool, &gig()).await.unwrap();
        let order: Order = CrudService::get_by_id(&pool, 10).await.unwrap();
        assert_eq!(order, gig());
        assert_eq!(order.executor_id, 2);
    }

    #[tokio::test]
    async fn create_with_taken_id_conflicts() {
        let pool = empty_pool().await;
        CrudService::create(&pool, &ann()).await.unwrap();
        let err = CrudService::create(&pool, &ann()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == "user 1 already exists"), "{err}");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = empty_pool().await;
        let err = CrudService::get_by_id::<Offer>(&pool, 3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "offer 3"), "{err}");
    }

    #[tokio::test]
    async fn user_update_keeps_id_and_email() {
        let pool = empty_pool().await;
        CrudService::create(&pool, &ann()).await.unwrap();
        let changes = UserChanges {
            first_name: "Anna".into(),
            last_name: "Li".into(),
            age: 31,
            role: "customer".into(),
            phone: "555-2".into(),
        };
        let updated = CrudService::update::<User>(&pool, 1, &changes).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.first_name, "Anna");
        assert_eq!(updated.age, 31);
        assert_eq!(updated.phone, "555-2");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(CrudService::get_by_id::<User>(&pool, 1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn order_and_offer_updates_overwrite_every_field() {
        let pool = empty_pool().await;
        CrudService::create(&pool, &gig()).await.unwrap();
        let changes = OrderChanges {
            name: "Paint shed".into(),
            description: "One coat".into(),
            start_date: "03/01/2024".into(),
            end_date: "04/01/2024".into(),
            address: "2 Main St".into(),
            price: -5,
            customer_id: 7,
            executor_id: 8,
        };
        let order = CrudService::update::<Order>(&pool, 10, &changes).await.unwrap();
        assert_eq!(order.id, 10);
        assert_eq!(order.price, -5);
        assert_eq!((order.customer_id, order.executor_id), (7, 8));

        CrudService::create(&pool, &Offer { id: 4, order_id: 10, executor_id: 2 }).await.unwrap();
        let offer = CrudService::update::<Offer>(&pool, 4, &OfferChanges { order_id: 11, executor_id: 3 })
            .await
            .unwrap();
        assert_eq!(offer, Offer { id: 4, order_id: 11, executor_id: 3 });
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = empty_pool().await;
        let err = CrudService::update::<Offer>(&pool, 9, &OfferChanges { order_id: 1, executor_id: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = empty_pool().await;
        CrudService::create(&pool, &gig()).await.unwrap();
        let removed = CrudService::delete::<Order>(&pool, 10).await.unwrap();
        assert_eq!(removed, gig());
        assert!(matches!(
            CrudService::get_by_id::<Order>(&pool, 10).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            CrudService::delete::<Order>(&pool, 10).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn count_follows_creates_and_deletes() {
        let pool = empty_pool().await;
        assert_eq!(CrudService::count::<Order>(&pool).await.unwrap(), 0);
        CrudService::create(&pool, &gig()).await.unwrap();
        CrudService::create(&pool, &ann()).await.unwrap();
        assert_eq!(CrudService::count::<Order>(&pool).await.unwrap(), 1);
        assert_eq!(CrudService::count::<User>(&pool).await.unwrap(), 1);
        CrudService::delete::<Order>(&pool, 10).await.unwrap();
        assert_eq!(CrudService::count::<Order>(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_id() {
        let pool = empty_pool().await;
        for id in [3, 1, 2] {
            CrudService::create(&pool, &Offer { id, order_id: 1, executor_id: 1 }).await.unwrap();
        }
        let ids: Vec<i64> = CrudService::list_all::<Offer>(&pool)
            .await
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
