use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl actix_web::error::ResponseError for LabError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn it_maps_errors_to_status_codes() {
        assert_eq!(
            LabError::Conflict("AB1234-48h".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            LabError::NotFound("AB1234-48h".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LabError::BadClientData("".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LabError::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
