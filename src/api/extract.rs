// Request extractors
//
// - `Cpf`: feeds the request gate; `cpf` query parameter first, then a `cpf` header
// - `ApiJson`: JSON body with structured 400 rejections

use crate::api::error::ApiError;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const CPF_HEADER: &str = "cpf";

/// National id of the customer a request is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpf(pub String);

#[derive(Deserialize)]
struct CpfQuery {
    cpf: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Cpf
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<CpfQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.cpf);

        let from_header = || {
            parts
                .headers
                .get(CPF_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        from_query
            .or_else(from_header)
            .map(|cpf| cpf.trim().to_string())
            .filter(|cpf| !cpf.is_empty())
            .map(Cpf)
            .ok_or_else(ApiError::missing_cpf)
    }
}

/// JSON body whose rejection is answered like any other `ApiError`
///
/// Take it as `Result<ApiJson<T>, ApiError>` when the gate has to run before
/// the body is validated.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
