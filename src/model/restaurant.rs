
use crate::model::base::{self, DbBmc};
use crate::model::{ModelManager, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Read-only rows feeding the dashboard's food-and-drink revenue panel.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RestaurantReservation {
    pub id: Uuid,
    pub price: Decimal,
    pub restaurant_id: String,
    pub user_id: String,
}

pub struct RestaurantReservationBmc;

impl DbBmc for RestaurantReservationBmc {
    const TABLE: &'static str = "restaurant_reservations";
    const ENTITY: &'static str = "restaurant_reservation";
    const COLUMNS: &'static str = "id, price, restaurant_id, user_id";
}

impl RestaurantReservationBmc {
    pub async fn list(mm: &ModelManager) -> Result<Vec<RestaurantReservation>> {
        base::list::<Self, _>(mm, None, None).await
    }
}
