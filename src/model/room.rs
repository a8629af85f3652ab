
use crate::model::base::{self, DbBmc, OrderBy};
use crate::model::booking::validate_money;
use crate::model::{Error, ModelManager, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub hotel_id: String,
}

#[derive(Deserialize)]
pub struct RoomForCreate {
    /// When None the store assigns the next number from its sequence.
    pub room_number: Option<String>,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub hotel_id: String,
}

#[derive(Deserialize, Default)]
pub struct RoomForUpdate {
    pub room_type: Option<String>,
    pub price_per_night: Option<Decimal>,
}

pub struct RoomBmc;

impl DbBmc for RoomBmc {
    const TABLE: &'static str = "rooms";
    const ENTITY: &'static str = "room";
    const COLUMNS: &'static str = "id, room_number, room_type, price_per_night, hotel_id";
}

const PG_UNIQUE_VIOLATION: &str = "23505";

impl RoomBmc {
    /// `id` and (absent an explicit choice) `room_number` are assigned by the
    /// store's sequences, so concurrent creates cannot collide.
    pub async fn create(mm: &ModelManager, room_c: RoomForCreate) -> Result<String> {
        validate_money(Self::ENTITY, "price_per_night", room_c.price_per_night)?;

        let db = mm.db();

        let res = match &room_c.room_number {
            Some(room_number) => {
                sqlx::query_as::<_, (String,)>(
                    "INSERT INTO rooms (room_number, room_type, price_per_night, hotel_id) \
                     VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(room_number)
                .bind(&room_c.room_type)
                .bind(room_c.price_per_night)
                .bind(&room_c.hotel_id)
                .fetch_one(db)
                .await
            }
            None => {
                sqlx::query_as::<_, (String,)>(
                    "INSERT INTO rooms (room_type, price_per_night, hotel_id) \
                     VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&room_c.room_type)
                .bind(room_c.price_per_night)
                .bind(&room_c.hotel_id)
                .fetch_one(db)
                .await
            }
        };

        match res {
            Ok((id,)) => Ok(id),
            Err(e) => Err(unique_violation_as_taken(e, room_c.room_number)),
        }
    }

    pub async fn get(mm: &ModelManager, id: &str) -> Result<Room> {
        base::get::<Self, _, _>(mm, id.to_string()).await
    }

    pub async fn list(mm: &ModelManager, order: Option<&OrderBy>) -> Result<Vec<Room>> {
        base::list::<Self, _>(mm, None, order).await
    }

    pub async fn update(mm: &ModelManager, id: &str, room_u: RoomForUpdate) -> Result<()> {
        if let Some(price_per_night) = room_u.price_per_night {
            validate_money(Self::ENTITY, "price_per_night", price_per_night)?;
        }

        let db = mm.db();
        let count = sqlx::query(
            "UPDATE rooms SET \
             room_type = COALESCE($2, room_type), \
             price_per_night = COALESCE($3, price_per_night) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(room_u.room_type)
        .bind(room_u.price_per_night)
        .execute(db)
        .await?
        .rows_affected();

        if count == 0 {
            return Err(Error::EntityNotFound {
                entity: Self::ENTITY,
                id: id.to_string(),
            });
        }

        Ok(())
    }

    pub async fn delete(mm: &ModelManager, id: &str) -> Result<()> {
        base::delete::<Self, _>(mm, id.to_string()).await
    }
}

/// A unique violation is only the caller's fault when the caller picked the
/// number; sequence-assigned collisions stay storage errors.
fn unique_violation_as_taken(e: sqlx::Error, room_number: Option<String>) -> Error {
    if let Some(room_number) = room_number {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return Error::RoomNumberTaken { room_number };
            }
        }
    }
    Error::Sqlx(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::_dev_utils;
    use serial_test::serial;
    use std::str::FromStr;

    fn room_fixture() -> RoomForCreate {
        RoomForCreate {
            room_number: None,
            room_type: "Double".to_string(),
            price_per_night: Decimal::from_str("180.00").unwrap(),
            hotel_id: "H1".to_string(),
        }
    }

    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl core::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{self:?}")
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn unique_violation() -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError(PG_UNIQUE_VIOLATION)))
    }

    #[test]
    fn test_explicit_number_collision_is_taken() {
        let err = unique_violation_as_taken(unique_violation(), Some("902".to_string()));
        assert!(matches!(
            err,
            Error::RoomNumberTaken { room_number } if room_number == "902"
        ));
    }

    #[test]
    fn test_sequence_collision_stays_storage_error() {
        // No caller-picked number means the conflict is not the client's doing.
        let err = unique_violation_as_taken(unique_violation(), None);
        assert!(matches!(err, Error::Sqlx(_)));
    }

    #[test]
    fn test_other_db_error_passes_through() {
        let err = unique_violation_as_taken(sqlx::Error::RowNotFound, Some("902".to_string()));
        assert!(matches!(err, Error::Sqlx(_)));
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let price = Decimal::from_str("-180.00").unwrap();
        let res = validate_money(RoomBmc::ENTITY, "price_per_night", price);
        assert!(matches!(
            res,
            Err(Error::InvalidField {
                field: "price_per_night",
                ..
            })
        ));
    }

    #[serial]
    #[tokio::test]
    #[ignore = "needs the dev Postgres from _dev_utils"]
    async fn test_create_assigns_id_and_number() -> anyhow::Result<()> {
        let mm = _dev_utils::init_test().await;

        let id = RoomBmc::create(&mm, room_fixture()).await?;
        let room = RoomBmc::get(&mm, &id).await?;

        assert!(room.id.starts_with('R'));
        assert!(!room.room_number.is_empty());

        RoomBmc::delete(&mm, &id).await?;
        Ok(())
    }

    #[serial]
    #[tokio::test]
    #[ignore = "needs the dev Postgres from _dev_utils"]
    async fn test_concurrent_creates_never_collide() -> anyhow::Result<()> {
        // Regression guard for the classic max+1-from-a-stale-snapshot bug:
        // identifiers come from the store, so two racing creates must differ.
        let mm = _dev_utils::init_test().await;

        let (a, b) = tokio::join!(
            RoomBmc::create(&mm, room_fixture()),
            RoomBmc::create(&mm, room_fixture()),
        );
        let (a, b) = (a?, b?);
        assert_ne!(a, b);

        let room_a = RoomBmc::get(&mm, &a).await?;
        let room_b = RoomBmc::get(&mm, &b).await?;
        assert_ne!(room_a.room_number, room_b.room_number);

        RoomBmc::delete(&mm, &a).await?;
        RoomBmc::delete(&mm, &b).await?;
        Ok(())
    }

    #[serial]
    #[tokio::test]
    #[ignore = "needs the dev Postgres from _dev_utils"]
    async fn test_explicit_number_conflict() -> anyhow::Result<()> {
        let mm = _dev_utils::init_test().await;

        let mut first = room_fixture();
        first.room_number = Some("902".to_string());
        let id = RoomBmc::create(&mm, first).await?;

        let mut second = room_fixture();
        second.room_number = Some("902".to_string());
        let res = RoomBmc::create(&mm, second).await;
        assert!(matches!(res, Err(Error::RoomNumberTaken { .. })));

        RoomBmc::delete(&mm, &id).await?;
        Ok(())
    }
}
