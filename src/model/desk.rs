
use crate::model::base::OrderBy;
use crate::model::booking::{Booking, BookingBmc, BookingForCreate, BookingForUpdate};
use crate::model::room::{Room, RoomBmc, RoomForCreate, RoomForUpdate};
use crate::model::view::TableView;
use crate::model::{ModelManager, Result};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// The dashboard's data surface: every read refreshes the cached table view,
/// every mutation is followed by a full refetch, and a failure leaves the
/// last-known-good snapshot untouched while the error propagates.
#[derive(Clone)]
pub struct FrontDesk {
    mm: ModelManager,
    bookings: Arc<TableView<Booking>>,
    rooms: Arc<TableView<Room>>,
}

impl FrontDesk {
    pub fn new(mm: ModelManager) -> Self {
        FrontDesk {
            mm,
            bookings: Arc::new(TableView::new()),
            rooms: Arc::new(TableView::new()),
        }
    }

    pub fn mm(&self) -> &ModelManager {
        &self.mm
    }

    // -- Bookings

    pub async fn bookings(&self, order: Option<OrderBy>) -> Result<Vec<Booking>> {
        debug!("{:<12} - bookings", "FRONT_DESK");
        let mm = self.mm.clone();
        self.bookings
            .refresh_with(|| async move { BookingBmc::list(&mm, order.as_ref()).await })
            .await
    }

    /// Status-filtered read; does not touch the cached full view.
    pub async fn bookings_by_status(
        &self,
        status: &str,
        order: Option<OrderBy>,
    ) -> Result<Vec<Booking>> {
        BookingBmc::list_by_status(&self.mm, status, order.as_ref()).await
    }

    pub async fn create_booking(&self, booking_c: BookingForCreate) -> Result<Booking> {
        let id = BookingBmc::create(&self.mm, booking_c).await?;
        let booking = BookingBmc::get(&self.mm, id).await?;
        self.bookings(None).await?;
        Ok(booking)
    }

    pub async fn update_booking(&self, id: Uuid, booking_u: BookingForUpdate) -> Result<Booking> {
        BookingBmc::update(&self.mm, id, booking_u).await?;
        let booking = BookingBmc::get(&self.mm, id).await?;
        self.bookings(None).await?;
        Ok(booking)
    }

    pub async fn check_in(&self, id: Uuid) -> Result<Booking> {
        debug!("{:<12} - check_in {id}", "FRONT_DESK");
        let booking = BookingBmc::check_in(&self.mm, id).await?;
        self.bookings(None).await?;
        Ok(booking)
    }

    pub async fn check_out(&self, id: Uuid) -> Result<Booking> {
        debug!("{:<12} - check_out {id}", "FRONT_DESK");
        let booking = BookingBmc::check_out(&self.mm, id).await?;
        self.bookings(None).await?;
        Ok(booking)
    }

    pub async fn delete_booking(&self, id: Uuid) -> Result<()> {
        BookingBmc::delete(&self.mm, id).await?;
        self.bookings(None).await?;
        Ok(())
    }

    pub async fn last_bookings(&self) -> Vec<Booking> {
        self.bookings.last().await
    }

    pub fn bookings_loading(&self) -> bool {
        self.bookings.is_loading()
    }

    // -- Rooms

    pub async fn rooms(&self, order: Option<OrderBy>) -> Result<Vec<Room>> {
        debug!("{:<12} - rooms", "FRONT_DESK");
        let mm = self.mm.clone();
        self.rooms
            .refresh_with(|| async move { RoomBmc::list(&mm, order.as_ref()).await })
            .await
    }

    pub async fn add_room(&self, room_c: RoomForCreate) -> Result<Room> {
        debug!("{:<12} - add_room", "FRONT_DESK");
        let id = RoomBmc::create(&self.mm, room_c).await?;
        let room = RoomBmc::get(&self.mm, &id).await?;
        self.rooms(None).await?;
        Ok(room)
    }

    pub async fn update_room(&self, id: &str, room_u: RoomForUpdate) -> Result<Room> {
        RoomBmc::update(&self.mm, id, room_u).await?;
        let room = RoomBmc::get(&self.mm, id).await?;
        self.rooms(None).await?;
        Ok(room)
    }

    pub async fn delete_room(&self, id: &str) -> Result<()> {
        RoomBmc::delete(&self.mm, id).await?;
        self.rooms(None).await?;
        Ok(())
    }

    pub async fn last_rooms(&self) -> Vec<Room> {
        self.rooms.last().await
    }

    pub fn rooms_loading(&self) -> bool {
        self.rooms.is_loading()
    }
}
