use axum::routing::{get, post, put};
use axum::Router;

use crate::model::desk::FrontDesk;

mod booking_rest;
mod dashboard_rest;
mod room_rest;

pub fn routes(desk: FrontDesk) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(booking_rest::list_bookings).post(booking_rest::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            put(booking_rest::update_booking).delete(booking_rest::delete_booking),
        )
        .route("/api/bookings/{id}/check-in", post(booking_rest::check_in))
        .route("/api/bookings/{id}/check-out", post(booking_rest::check_out))
        .route(
            "/api/rooms",
            get(room_rest::list_rooms).post(room_rest::create_room),
        )
        .route(
            "/api/rooms/{id}",
            put(room_rest::update_room).delete(room_rest::delete_room),
        )
        .route("/api/dashboard", get(dashboard_rest::dashboard))
        .with_state(desk)
}
