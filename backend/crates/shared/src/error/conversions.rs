//! Conversions into [`AppError`]

use super::app_error::AppError;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal("Storage operation failed").with_source(err)
    }
}

/// Map a PostgreSQL SQLSTATE to an error
///
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
pub fn from_pg_code(code: &str) -> AppError {
    match code {
        "23505" => AppError::conflict("Duplicate key value"),
        "23503" => AppError::not_found("Referenced record not found"),
        "23502" | "23514" => AppError::bad_request("Constraint violation"),
        // operator intervention, connection failure
        c if c.starts_with("57") || c.starts_with("08") => {
            AppError::internal("Database unavailable")
        }
        _ => AppError::internal("Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let app_err = match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::internal("Database connection error")
            }
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => from_pg_code(&code),
                None => AppError::internal("Database error"),
            },
            _ => AppError::internal("Database error"),
        };
        app_err.with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let public = self.public();
        let status =
            StatusCode::from_u16(public.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(public.problem())).into_response()
    }
}
