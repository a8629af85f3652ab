
use crate::model::base;
use crate::model::booking::{Booking, BookingBmc};
use crate::model::restaurant::RestaurantReservationBmc;
use crate::model::room::RoomBmc;
use crate::model::{ModelManager, Result};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OccupancySnapshot {
    pub occupied: i64,
    pub total: i64,
}

impl OccupancySnapshot {
    /// Display figure only; money stays in Decimal.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied as f64 / self.total as f64
    }
}

/// Decimal-exact sum of every booking's total_price, computed by the store.
pub async fn revenue(mm: &ModelManager) -> Result<Decimal> {
    let (total,): (Decimal,) =
        sqlx::query_as("SELECT COALESCE(SUM(total_price), 0) FROM bookings")
            .fetch_one(mm.db())
            .await?;
    Ok(total)
}

/// The restaurant panel sums over fetched rows rather than asking the store,
/// mirroring how the dashboard consumes this table.
pub async fn restaurant_revenue(mm: &ModelManager) -> Result<Decimal> {
    let reservations = RestaurantReservationBmc::list(mm).await?;
    Ok(reservations.iter().map(|r| r.price).sum())
}

pub async fn occupancy(mm: &ModelManager) -> Result<OccupancySnapshot> {
    let (occupied,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM rooms WHERE room_number IN \
         (SELECT room_number FROM bookings WHERE room_number IS NOT NULL)",
    )
    .fetch_one(mm.db())
    .await?;
    let total = base::count::<RoomBmc>(mm).await?;

    Ok(OccupancySnapshot { occupied, total })
}

pub async fn booking_count(mm: &ModelManager) -> Result<i64> {
    base::count::<BookingBmc>(mm).await
}

/// Same figure as `revenue`, over rows already in hand (the cached view).
pub fn revenue_of(bookings: &[Booking]) -> Decimal {
    bookings.iter().map(|b| b.total_price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::_dev_utils;
    use chrono::NaiveDate;
    use serial_test::serial;
    use std::str::FromStr;
    use uuid::Uuid;

    fn booking_with_price(price: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            guest_name: "guest".to_string(),
            guest_nationality: "Dutch".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 10, 5).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 10, 6).unwrap(),
            room_type: "Single".to_string(),
            room_number: None,
            number_of_guests: 1,
            total_price: Decimal::from_str(price).unwrap(),
            status: "Confirmed".to_string(),
        }
    }

    #[test]
    fn test_revenue_of_is_decimal_exact() {
        let bookings = vec![
            booking_with_price("100.00"),
            booking_with_price("250.50"),
            booking_with_price("0"),
        ];

        let total = revenue_of(&bookings);
        assert_eq!(total, Decimal::from_str("350.50").unwrap());
        assert_eq!(total.to_string(), "350.50");
    }

    #[test]
    fn test_revenue_of_empty_is_zero() {
        assert_eq!(revenue_of(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_occupancy_rate() {
        let snap = OccupancySnapshot {
            occupied: 3,
            total: 4,
        };
        assert_eq!(snap.rate(), 0.75);

        let empty = OccupancySnapshot {
            occupied: 0,
            total: 0,
        };
        assert_eq!(empty.rate(), 0.0);
    }

    #[serial]
    #[tokio::test]
    #[ignore = "needs the dev Postgres from _dev_utils"]
    async fn test_revenue_matches_listed_rows() -> anyhow::Result<()> {
        let mm = _dev_utils::init_test().await;

        let from_store = revenue(&mm).await?;
        let rows = BookingBmc::list(&mm, None).await?;
        assert_eq!(from_store, revenue_of(&rows));
        Ok(())
    }
}
