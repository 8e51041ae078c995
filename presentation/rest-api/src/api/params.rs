use chrono::{Local, NaiveDate};
use poem_openapi::payload::Json;

use business::domain::item::value_objects::parse_date;

use crate::api::error::ErrorResponse;

/// Resolves the `today` query parameter, defaulting to the local calendar date.
pub fn resolve_today(today: Option<String>) -> Result<NaiveDate, Json<ErrorResponse>> {
    match today {
        Some(raw) => parse_date(&raw).map_err(|_| ErrorResponse::validation("request.invalid_today")),
        None => Ok(Local::now().date_naive()),
    }
}
