
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::model::desk::FrontDesk;
use crate::model::room::{Room, RoomForCreate, RoomForUpdate};
use crate::model::{OrderBy, OrderDir};

use super::super::{Error, Result};

#[derive(Deserialize, Default)]
pub struct RoomListParams {
    order_by: Option<String>,
    desc: Option<bool>,
}

pub async fn list_rooms(
    State(desk): State<FrontDesk>,
    Query(params): Query<RoomListParams>,
) -> Result<Json<Vec<Room>>> {
    debug!("{:<12} - list_rooms", "HANDLER");

    let order = room_order(&params)?;
    Ok(Json(desk.rooms(order).await?))
}

fn room_order(params: &RoomListParams) -> Result<Option<OrderBy>> {
    let Some(order_by) = &params.order_by else {
        return Ok(None);
    };
    let column = match order_by.as_str() {
        "room_number" => "room_number",
        "room_type" => "room_type",
        "price_per_night" => "price_per_night",
        _ => return Err(Error::QueryInvalid { param: "order_by" }),
    };
    let dir = if params.desc.unwrap_or(false) {
        OrderDir::Desc
    } else {
        OrderDir::Asc
    };
    Ok(Some(OrderBy { column, dir }))
}

pub async fn create_room(
    State(desk): State<FrontDesk>,
    Json(room_c): Json<RoomForCreate>,
) -> Result<Json<Room>> {
    debug!("{:<12} - create_room", "HANDLER");
    Ok(Json(desk.add_room(room_c).await?))
}

pub async fn update_room(
    State(desk): State<FrontDesk>,
    Path(id): Path<String>,
    Json(room_u): Json<RoomForUpdate>,
) -> Result<Json<Room>> {
    debug!("{:<12} - update_room {id}", "HANDLER");
    Ok(Json(desk.update_room(&id, room_u).await?))
}

pub async fn delete_room(
    State(desk): State<FrontDesk>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    debug!("{:<12} - delete_room {id}", "HANDLER");
    desk.delete_room(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_order_rejects_unknown_column() {
        let params = RoomListParams {
            order_by: Some("hotel_id".to_string()),
            ..Default::default()
        };
        // hotel_id is a grouping key, not a sort the dashboard offers
        assert!(matches!(
            room_order(&params),
            Err(Error::QueryInvalid { param: "order_by" })
        ));
    }

    #[test]
    fn test_room_order_desc() {
        let params = RoomListParams {
            order_by: Some("price_per_night".to_string()),
            desc: Some(true),
        };
        let order = room_order(&params).unwrap().unwrap();
        assert_eq!(order.column, "price_per_night");
        assert!(matches!(order.dir, OrderDir::Desc));
    }
}
