
use crate::model;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    QueryInvalid { param: &'static str },

    Model(model::Error),
}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        println!("->> {:<12} - web::Error {self:?}", "INTO_RES");
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(Arc::new(self));
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use model::Error as ME;

        match self {
            Error::QueryInvalid { .. } => (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS),

            Error::Model(ME::EntityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, ClientError::ENTITY_NOT_FOUND)
            }
            Error::Model(ME::InvalidField { .. }) | Error::Model(ME::RoomNumberTaken { .. }) => {
                (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS)
            }
            Error::Model(ME::RoomsExhausted) => (StatusCode::CONFLICT, ClientError::NO_ROOMS_FREE),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }
}

#[derive(Debug, Clone, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    INVALID_PARAMS,
    ENTITY_NOT_FOUND,
    NO_ROOMS_FREE,
    SERVICE_ERROR,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::Model(model::Error::EntityNotFound {
            entity: "booking",
            id: "B1".to_string(),
        });
        let (status, client_error) = err.client_status_and_error();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(client_error.as_ref(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = Error::Model(model::Error::InvalidField {
            entity: "room",
            field: "price_per_night",
            reason: "must not be negative",
        });
        let (status, _) = err.client_status_and_error();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_maps_to_500() {
        let err = Error::Model(model::Error::Sqlx(sqlx::Error::RowNotFound));
        let (status, client_error) = err.client_status_and_error();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(client_error.as_ref(), "SERVICE_ERROR");
    }
}
