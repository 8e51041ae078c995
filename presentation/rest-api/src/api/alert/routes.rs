use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::alert::use_cases::check::{CheckAlertsParams, CheckAlertsUseCase};
use business::domain::alert::use_cases::get_keys::GetAlertedKeysUseCase;

use crate::api::alert::dto::{AlertResponse, AlertedKeysResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::params::resolve_today;
use crate::api::tags::ApiTags;

pub struct AlertApi {
    check_use_case: Arc<dyn CheckAlertsUseCase>,
    get_keys_use_case: Arc<dyn GetAlertedKeysUseCase>,
}

impl AlertApi {
    pub fn new(
        check_use_case: Arc<dyn CheckAlertsUseCase>,
        get_keys_use_case: Arc<dyn GetAlertedKeysUseCase>,
    ) -> Self {
        Self {
            check_use_case,
            get_keys_use_case,
        }
    }
}

/// Expiry alerts
#[OpenApi]
impl AlertApi {
    /// Run an alert check
    ///
    /// Sends the notifications that are due as of `today` and returns them.
    /// Each item is alerted at most once per kind.
    #[oai(path = "/api/alerts/check", method = "post", tag = "ApiTags::Alerts")]
    async fn check(&self, today: Query<Option<String>>) -> CheckAlertsResponse {
        let today = match resolve_today(today.0) {
            Ok(today) => today,
            Err(json) => return CheckAlertsResponse::BadRequest(json),
        };

        match self.check_use_case.execute(CheckAlertsParams { today }).await {
            Ok(alerts) => {
                let responses: Vec<AlertResponse> = alerts.into_iter().map(|a| a.into()).collect();
                CheckAlertsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CheckAlertsResponse::InternalError(json)
            }
        }
    }

    /// List delivered alert keys
    #[oai(path = "/api/alerts", method = "get", tag = "ApiTags::Alerts")]
    async fn get_keys(&self) -> GetAlertedKeysResponse {
        match self.get_keys_use_case.execute().await {
            Ok(keys) => GetAlertedKeysResponse::Ok(Json(keys.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAlertedKeysResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckAlertsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AlertResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAlertedKeysResponse {
    #[oai(status = 200)]
    Ok(Json<AlertedKeysResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
