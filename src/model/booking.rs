
use crate::model::base::{self, DbBmc, ListFilter, OrderBy};
use crate::model::{Error, ModelManager, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub guest_name: String,
    pub guest_nationality: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub room_type: String,
    /// None means unassigned or checked out.
    pub room_number: Option<String>,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: String,
}

#[derive(Deserialize)]
pub struct BookingForCreate {
    pub guest_name: String,
    pub guest_nationality: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub room_type: String,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: Option<String>,
}

/// Partial update. `room_number` is deliberately absent: it only moves
/// through check_in/check_out.
#[derive(Deserialize, Default)]
pub struct BookingForUpdate {
    pub guest_name: Option<String>,
    pub guest_nationality: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub number_of_guests: Option<i32>,
    pub total_price: Option<Decimal>,
    pub status: Option<String>,
}

pub struct BookingBmc;

impl DbBmc for BookingBmc {
    const TABLE: &'static str = "bookings";
    const ENTITY: &'static str = "booking";
    const COLUMNS: &'static str = "id, guest_name, guest_nationality, check_in_date, \
        check_out_date, room_type, room_number, number_of_guests, total_price, status";
}

impl BookingBmc {
    pub async fn create(mm: &ModelManager, booking_c: BookingForCreate) -> Result<Uuid> {
        validate_guest_count(booking_c.number_of_guests)?;
        validate_money(Self::ENTITY, "total_price", booking_c.total_price)?;

        let db = mm.db();
        let status = booking_c.status.unwrap_or_else(|| "Confirmed".to_string());

        let (id,) = sqlx::query_as::<_, (Uuid,)>(
            "INSERT INTO bookings \
             (guest_name, guest_nationality, check_in_date, check_out_date, \
              room_type, number_of_guests, total_price, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(booking_c.guest_name)
        .bind(booking_c.guest_nationality)
        .bind(booking_c.check_in_date)
        .bind(booking_c.check_out_date)
        .bind(booking_c.room_type)
        .bind(booking_c.number_of_guests)
        .bind(booking_c.total_price)
        .bind(status)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    pub async fn get(mm: &ModelManager, id: Uuid) -> Result<Booking> {
        base::get::<Self, _, _>(mm, id).await
    }

    pub async fn list(mm: &ModelManager, order: Option<&OrderBy>) -> Result<Vec<Booking>> {
        base::list::<Self, _>(mm, None, order).await
    }

    pub async fn list_by_status(
        mm: &ModelManager,
        status: &str,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Booking>> {
        let filter = ListFilter {
            column: "status",
            value: status.to_string(),
        };
        base::list::<Self, _>(mm, Some(&filter), order).await
    }

    pub async fn update(mm: &ModelManager, id: Uuid, booking_u: BookingForUpdate) -> Result<()> {
        if let Some(number_of_guests) = booking_u.number_of_guests {
            validate_guest_count(number_of_guests)?;
        }
        if let Some(total_price) = booking_u.total_price {
            validate_money(Self::ENTITY, "total_price", total_price)?;
        }

        let db = mm.db();
        let count = sqlx::query(
            "UPDATE bookings SET \
             guest_name = COALESCE($2, guest_name), \
             guest_nationality = COALESCE($3, guest_nationality), \
             check_in_date = COALESCE($4, check_in_date), \
             check_out_date = COALESCE($5, check_out_date), \
             room_type = COALESCE($6, room_type), \
             number_of_guests = COALESCE($7, number_of_guests), \
             total_price = COALESCE($8, total_price), \
             status = COALESCE($9, status) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(booking_u.guest_name)
        .bind(booking_u.guest_nationality)
        .bind(booking_u.check_in_date)
        .bind(booking_u.check_out_date)
        .bind(booking_u.room_type)
        .bind(booking_u.number_of_guests)
        .bind(booking_u.total_price)
        .bind(booking_u.status)
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

    pub async fn delete(mm: &ModelManager, id: Uuid) -> Result<()> {
        base::delete::<Self, _>(mm, id).await
    }

    /// Assigns the first room not occupied by any booking. Any booking can be
    /// checked in from any state; the select/update pair is last-writer-wins
    /// like every other mutation here.
    pub async fn check_in(mm: &ModelManager, id: Uuid) -> Result<Booking> {
        let db = mm.db();

        let free: Option<(String,)> = sqlx::query_as(
            "SELECT room_number FROM rooms \
             WHERE room_number NOT IN \
               (SELECT room_number FROM bookings WHERE room_number IS NOT NULL) \
             ORDER BY room_number LIMIT 1",
        )
        .fetch_optional(db)
        .await?;

        let (room_number,) = free.ok_or(Error::RoomsExhausted)?;

        let count = sqlx::query("UPDATE bookings SET room_number = $2 WHERE id = $1")
            .bind(id)
            .bind(&room_number)
            .execute(db)
            .await?
            .rows_affected();

        if count == 0 {
            return Err(Error::EntityNotFound {
                entity: Self::ENTITY,
                id: id.to_string(),
            });
        }

        Self::get(mm, id).await
    }

    pub async fn check_out(mm: &ModelManager, id: Uuid) -> Result<Booking> {
        let db = mm.db();

        let count = sqlx::query("UPDATE bookings SET room_number = NULL WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?
            .rows_affected();

        if count == 0 {
            return Err(Error::EntityNotFound {
                entity: Self::ENTITY,
                id: id.to_string(),
            });
        }

        Self::get(mm, id).await
    }
}

pub(in crate::model) fn validate_money(
    entity: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<()> {
    if value.is_sign_negative() {
        return Err(Error::InvalidField {
            entity,
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn validate_guest_count(number_of_guests: i32) -> Result<()> {
    if number_of_guests <= 0 {
        return Err(Error::InvalidField {
            entity: BookingBmc::ENTITY,
            field: "number_of_guests",
            reason: "must be positive",
        });
    }
    Ok(())
}
