//! JSON handlers for presenters.
//!
//! Bodies are read as raw bytes and decoded here so that malformed JSON
//! surfaces as an [`ApiError`] with the same envelope as every other failure.
//! A body that cannot be buffered at all is reported the same way instead of
//! through axum's plain-text rejection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use podium_app::ports::PresenterRepository;
use podium_domain::error::PodiumError;
use podium_domain::id::PresenterId;
use podium_domain::presenter::{Presenter, PresenterDraft};

use crate::error::{ApiError, IdRequiredFor};
use crate::state::AppState;

/// Request body for create and update.
#[derive(Debug, Default, Deserialize)]
pub struct PresenterPayload {
    pub name: Option<String>,
    pub topic: Option<String>,
    pub bio: Option<String>,
}

impl PresenterPayload {
    fn parse(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(ApiError::MalformedBody)
    }

    fn into_draft(self) -> Result<PresenterDraft, PodiumError> {
        PresenterDraft::builder()
            .name(self.name.unwrap_or_default())
            .topic(self.topic.unwrap_or_default())
            .maybe_bio(self.bio)
            .build()
    }
}

/// Confirmation body for mutations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Confirmation body for create.
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub id: PresenterId,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Presenter>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
///
/// A segment that is not an id falls back to listing.
pub enum GetResponse {
    One(Json<Presenter>),
    All(ListResponse),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::One(json) => json.into_response(),
            Self::All(list) => list.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum MutationResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for MutationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/presenters`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let presenters = state.presenter_service.list_presenters().await?;
    Ok(ListResponse::Ok(Json(presenters)))
}

/// `GET /api/presenters/{id}`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(segment): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let Some(id) = PresenterId::from_segment(&segment) else {
        return Ok(GetResponse::All(list(State(state)).await?));
    };
    let presenter = state.presenter_service.get_presenter(id).await?;
    Ok(GetResponse::One(Json(presenter)))
}

/// `POST /api/presenters`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let draft = PresenterPayload::parse(&body?)?.into_draft()?;
    let id = state.presenter_service.create_presenter(draft).await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "Presenter added successfully.",
        id,
    })))
}

/// `PUT /api/presenters/{id}`
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(segment): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<MutationResponse, ApiError>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let id = PresenterId::from_segment(&segment)
        .ok_or(ApiError::MissingId(IdRequiredFor::Update))?;
    let draft = PresenterPayload::parse(&body?)?.into_draft()?;
    state.presenter_service.update_presenter(id, draft).await?;
    Ok(MutationResponse::Ok(Json(MessageBody {
        message: format!("Presenter {id} updated successfully."),
    })))
}

/// `DELETE /api/presenters/{id}`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(segment): Path<String>,
) -> Result<MutationResponse, ApiError>
where
    PR: PresenterRepository + Send + Sync + 'static,
{
    let id = PresenterId::from_segment(&segment)
        .ok_or(ApiError::MissingId(IdRequiredFor::Deletion))?;
    state.presenter_service.delete_presenter(id).await?;
    Ok(MutationResponse::Ok(Json(MessageBody {
        message: format!("Presenter {id} deleted successfully."),
    })))
}

/// `PUT /api/presenters`
pub async fn update_without_id() -> ApiError {
    ApiError::MissingId(IdRequiredFor::Update)
}

/// `DELETE /api/presenters`
pub async fn delete_without_id() -> ApiError {
    ApiError::MissingId(IdRequiredFor::Deletion)
}

/// Any method without a handler on a presenter route.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_domain::error::ValidationError;

    #[test]
    fn should_accept_payload_without_bio() {
        let payload = PresenterPayload::parse(br#"{"name":"Ada","topic":"Computing"}"#).unwrap();
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.name, "Ada");
        assert!(draft.bio.is_none());
    }

    #[test]
    fn should_accept_null_bio() {
        let payload =
            PresenterPayload::parse(br#"{"name":"Ada","topic":"Computing","bio":null}"#).unwrap();
        assert!(payload.into_draft().unwrap().bio.is_none());
    }

    #[test]
    fn should_reject_payload_missing_topic() {
        let payload = PresenterPayload::parse(br#"{"name":"Ada","bio":"x"}"#).unwrap();
        assert!(matches!(
            payload.into_draft(),
            Err(PodiumError::Validation(
                ValidationError::MissingRequiredFields
            ))
        ));
    }

    #[test]
    fn should_report_malformed_json() {
        let result = PresenterPayload::parse(b"{not json");
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[test]
    fn should_refuse_non_string_name() {
        let result = PresenterPayload::parse(br#"{"name":5,"topic":"Computing"}"#);
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[test]
    fn should_serialize_created_body() {
        let body = CreatedBody {
            message: "Presenter added successfully.",
            id: PresenterId::try_from(1).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"message": "Presenter added successfully.", "id": 1})
        );
    }
}
