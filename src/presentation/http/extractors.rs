// src/presentation/http/extractors.rs
use crate::{
    application::{
        commands::users::AuthenticateCommand, dto::AuthenticatedUser, error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

use super::error::HttpError;

/// Requires valid HTTP Basic credentials.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Resolves Basic credentials when present. Invalid credentials are still
/// rejected rather than treated as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

async fn authenticate(
    state: &HttpState,
    credentials: &Authorization<Basic>,
) -> Result<AuthenticatedUser, HttpError> {
    state
        .services
        .user_commands
        .authenticate(AuthenticateCommand {
            username: credentials.username().to_string(),
            password: credentials.password().to_string(),
        })
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;

        let credentials = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "authentication credentials were not provided",
                ))
            })?;

        authenticate(&app_state, &credentials).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;

        match parts.headers.typed_get::<Authorization<Basic>>() {
            Some(credentials) => authenticate(&app_state, &credentials)
                .await
                .map(|user| Self(Some(user))),
            None => Ok(Self(None)),
        }
    }
}
