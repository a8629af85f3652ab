
use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::model::booking::Booking;
use crate::model::desk::FrontDesk;
use crate::model::report::{self, OccupancySnapshot};

use super::super::Result;

#[derive(Serialize)]
pub struct DashboardView {
    pub total_revenue: Decimal,
    pub restaurant_revenue: Decimal,
    pub occupancy: OccupancySnapshot,
    pub occupancy_rate: f64,
    pub booking_count: i64,
    pub recent_bookings: Vec<Booking>,
}

pub async fn dashboard(State(desk): State<FrontDesk>) -> Result<Json<DashboardView>> {
    debug!("{:<12} - dashboard", "HANDLER");

    let mm = desk.mm();
    let total_revenue = report::revenue(mm).await?;
    let restaurant_revenue = report::restaurant_revenue(mm).await?;
    let occupancy = report::occupancy(mm).await?;
    let booking_count = report::booking_count(mm).await?;
    let recent_bookings = desk.bookings_by_status("Confirmed", None).await?;

    Ok(Json(DashboardView {
        total_revenue,
        restaurant_revenue,
        occupancy,
        occupancy_rate: occupancy.rate(),
        booking_count,
        recent_bookings,
    }))
}
