//! Request extractors
//!
//! Body, query and path extractors that reject with [`ApiError`] so every
//! failure uses the same JSON envelope, plus the bearer-token actor.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use softdesk_application::ApplicationError;
use softdesk_permissions::Actor;

use crate::{error::ApiError, state::AppState};

/// JSON body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// The caller. No `Authorization` header means anonymous; a header that is
/// present but not a valid bearer token is rejected.
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

#[async_trait]
impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(CurrentActor(Actor::Anonymous));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Authentication("expected a bearer token".to_string()))?;

        let actor = state.services.auth.actor_for_token(token).await?;
        Ok(CurrentActor(actor))
    }
}

/// A caller that must be signed in. Resolved before the body is read, so an
/// anonymous write is refused whatever it sends.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub Actor);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match CurrentActor::from_request_parts(parts, state).await? {
            CurrentActor(Actor::Anonymous) => Err(ApplicationError::NotAuthenticated.into()),
            CurrentActor(actor) => Ok(Authenticated(actor)),
        }
    }
}
