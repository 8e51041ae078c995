use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::item::classifier::classify_item;
use business::domain::item::use_cases::clear_all::ClearAllItemsUseCase;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ClearAllResponse, CreateItemRequest, ItemResponse};
use crate::api::params::resolve_today;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    clear_all_use_case: Arc<dyn ClearAllItemsUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        clear_all_use_case: Arc<dyn ClearAllItemsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
            clear_all_use_case,
        }
    }
}

/// Tracked items
///
/// Every item is returned with its expiry date, days left and freshness status.
#[OpenApi]
impl ItemApi {
    /// List all items
    ///
    /// Classifies each item as of `today` (`YYYY-MM-DD`, local date when omitted).
    #[oai(path = "/api/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self, today: Query<Option<String>>) -> GetAllItemsResponse {
        let today = match resolve_today(today.0) {
            Ok(today) => today,
            Err(json) => return GetAllItemsResponse::BadRequest(json),
        };

        match self.get_all_use_case.execute(GetAllItemsParams { today }).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Add an item
    ///
    /// The created item is classified as of `today`, like the list endpoint.
    #[oai(path = "/api/items", method = "post", tag = "ApiTags::Items")]
    async fn create(
        &self,
        today: Query<Option<String>>,
        body: Json<CreateItemRequest>,
    ) -> CreateItemResponse {
        let today = match resolve_today(today.0) {
            Ok(today) => today,
            Err(json) => return CreateItemResponse::BadRequest(json),
        };

        let params = CreateItemParams {
            name: body.0.name,
            purchase_date: body.0.purchase_date,
            shelf_life: body.0.shelf_life,
        };

        let created = self
            .create_use_case
            .execute(params)
            .await
            .and_then(|item| classify_item(&item, today));

        match created {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Alerts already delivered for the item stay recorded.
    #[oai(path = "/api/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<String>) -> DeleteItemResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteItemResponse::BadRequest(ErrorResponse::validation("item.invalid_id")),
        };

        match self
            .delete_use_case
            .execute(DeleteItemParams { id: uuid })
            .await
        {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear all items
    ///
    /// Removes every item and forgets every delivered alert.
    #[oai(path = "/api/items", method = "delete", tag = "ApiTags::Items")]
    async fn clear_all(&self) -> ClearAllItemsResponse {
        match self.clear_all_use_case.execute().await {
            Ok(count) => ClearAllItemsResponse::Ok(Json(ClearAllResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearAllItemsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ClearAllResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::item::errors::ItemError;
    use business::domain::item::model::{ClassifiedItem, Item};
    use business::domain::item::value_objects::ShelfLife;
    use chrono::NaiveDate;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::Route;
    use poem_openapi::OpenApiService;

    mock! {
        pub Create {}

        #[async_trait]
        impl CreateItemUseCase for Create {
            async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
        }
    }

    mock! {
        pub GetAll {}

        #[async_trait]
        impl GetAllItemsUseCase for GetAll {
            async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<ClassifiedItem>, ItemError>;
        }
    }

    mock! {
        pub Delete {}

        #[async_trait]
        impl DeleteItemUseCase for Delete {
            async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
        }
    }

    mock! {
        pub ClearAll {}

        #[async_trait]
        impl ClearAllItemsUseCase for ClearAll {
            async fn execute(&self) -> Result<u64, ItemError>;
        }
    }

    fn client(
        create: MockCreate,
        get_all: MockGetAll,
        delete: MockDelete,
        clear_all: MockClearAll,
    ) -> TestClient<Route> {
        let api = ItemApi::new(
            Arc::new(create),
            Arc::new(get_all),
            Arc::new(delete),
            Arc::new(clear_all),
        );
        let service = OpenApiService::new(api, "Freshness Tracker API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    fn milk() -> Item {
        Item::new(
            "Milk".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ShelfLife::new(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_answer_not_found_when_deleting_unknown_item() {
        let mut delete = MockDelete::new();
        delete
            .expect_execute()
            .times(1)
            .returning(|_| Err(ItemError::NotFound));
        let cli = client(MockCreate::new(), MockGetAll::new(), delete, MockClearAll::new());

        let resp = cli
            .delete(format!("/api/items/{}", uuid::Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_malformed_item_id() {
        let mut delete = MockDelete::new();
        delete.expect_execute().never();
        let cli = client(MockCreate::new(), MockGetAll::new(), delete, MockClearAll::new());

        let resp = cli.delete("/api/items/legacy-1").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_answer_no_content_after_delete() {
        let mut delete = MockDelete::new();
        delete.expect_execute().times(1).returning(|_| Ok(()));
        let cli = client(MockCreate::new(), MockGetAll::new(), delete, MockClearAll::new());

        let resp = cli
            .delete(format!("/api/items/{}", uuid::Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_malformed_today() {
        let mut get_all = MockGetAll::new();
        get_all.expect_execute().never();
        let cli = client(MockCreate::new(), get_all, MockDelete::new(), MockClearAll::new());

        let resp = cli.get("/api/items?today=yesterday").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_pass_today_to_listing() {
        let mut get_all = MockGetAll::new();
        get_all
            .expect_execute()
            .withf(|params| params.today == NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
            .times(1)
            .returning(|_| Ok(vec![]));
        let cli = client(MockCreate::new(), get_all, MockDelete::new(), MockClearAll::new());

        let resp = cli.get("/api/items?today=2024-01-03").send().await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_create_item_classified_as_of_today() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .withf(|params| params.name == "Milk" && params.shelf_life == 5.0)
            .times(1)
            .returning(|_| Ok(milk()));
        let cli = client(create, MockGetAll::new(), MockDelete::new(), MockClearAll::new());

        let resp = cli
            .post("/api/items?today=2024-01-03")
            .body_json(&serde_json::json!({
                "name": "Milk",
                "purchaseDate": "2024-01-01",
                "shelfLife": 5
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let value = json.value();
        let body = value.object();
        body.get("expiry").assert_string("2024-01-06");
        body.get("daysLeft").assert_i64(3);
        body.get("status").assert_string("soon");
        body.get("statusLabel").assert_string("Use Soon");
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_invalid_item() {
        let mut create = MockCreate::new();
        create
            .expect_execute()
            .returning(|_| Err(ItemError::InvalidShelfLife));
        let cli = client(create, MockGetAll::new(), MockDelete::new(), MockClearAll::new());

        let resp = cli
            .post("/api/items")
            .body_json(&serde_json::json!({
                "name": "Milk",
                "purchaseDate": "2024-01-01",
                "shelfLife": -1
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_report_cleared_count() {
        let mut clear_all = MockClearAll::new();
        clear_all.expect_execute().times(1).returning(|| Ok(2));
        let cli = client(MockCreate::new(), MockGetAll::new(), MockDelete::new(), clear_all);

        let resp = cli.delete("/api/items").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("count").assert_i64(2);
    }

    #[tokio::test]
    async fn should_answer_internal_error_when_store_fails() {
        let mut get_all = MockGetAll::new();
        get_all
            .expect_execute()
            .returning(|_| Err(ItemError::Repository(RepositoryError::Persistence)));
        let cli = client(MockCreate::new(), get_all, MockDelete::new(), MockClearAll::new());

        let resp = cli.get("/api/items").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
