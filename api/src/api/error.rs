use std::fmt::{Debug, Display};
use std::panic::Location;

use hyper::{Body, StatusCode};
use routerify::RequestInfo;
use serde_json::json;

use super::macros::make_response;

pub type Result<T, E = RouteError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("failed to read http body: {0}")]
    ReadHttpBody(#[from] hyper::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A request-level error that already knows how to render itself.
///
/// Carries the response to send, the caller location and tracing span for
/// logging, and optionally the underlying [`ApiError`].
pub struct RouteError {
    source: Option<ApiError>,
    location: &'static Location<'static>,
    span: tracing::Span,
    response: hyper::Response<Body>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShouldLog {
    Yes,
    Debug,
    No,
}

impl RouteError {
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn response(self) -> hyper::Response<Body> {
        self.response
    }

    pub fn should_log(&self) -> ShouldLog {
        match self.response.status().is_server_error() {
            true => ShouldLog::Yes,
            false => match self.source.is_some() {
                true => ShouldLog::Debug,
                false => ShouldLog::No,
            },
        }
    }

    fn with_source(mut self, source: Option<ApiError>) -> Self {
        self.source = source;
        self
    }

    fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = location;
        self
    }
}

impl From<hyper::Response<Body>> for RouteError {
    #[track_caller]
    fn from(res: hyper::Response<Body>) -> Self {
        Self {
            source: None,
            span: tracing::Span::current(),
            location: Location::caller(),
            response: res,
        }
    }
}

impl From<(StatusCode, &'_ str)> for RouteError {
    #[track_caller]
    fn from(status: (StatusCode, &'_ str)) -> Self {
        Self {
            source: None,
            span: tracing::Span::current(),
            location: Location::caller(),
            response: make_response!(status.0, json!({ "message": status.1, "success": false })),
        }
    }
}

impl<T: Into<ApiError>> From<(StatusCode, &'_ str, T)> for RouteError {
    #[track_caller]
    fn from(status: (StatusCode, &'_ str, T)) -> Self {
        Self {
            source: Some(status.2.into()),
            span: tracing::Span::current(),
            location: Location::caller(),
            response: make_response!(status.0, json!({ "message": status.1, "success": false })),
        }
    }
}

impl Debug for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(err) => write!(f, "RouteError: {:?}", err),
            None => write!(f, "RouteError: Unknown Source"),
        }
    }
}

impl Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(err) => write!(f, "RouteError: {}", err),
            None => write!(f, "RouteError: Unknown Source"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(err) => Some(err),
            None => None,
        }
    }
}

pub trait ResultExt<T, E>: Sized {
    fn map_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>,
        E: Into<ApiError>;

    fn map_ignore_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    #[track_caller]
    fn map_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>,
        E: Into<ApiError>,
    {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(RouteError::from(ctx)
                .with_source(Some(err.into()))
                .with_location(Location::caller())),
        }
    }

    #[track_caller]
    fn map_ignore_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>,
    {
        match self {
            Ok(val) => Ok(val),
            Err(_) => Err(RouteError::from(ctx).with_location(Location::caller())),
        }
    }
}

pub trait OptionExt<T>: Sized {
    fn map_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn map_err_route<C>(self, ctx: C) -> Result<T>
    where
        RouteError: From<C>,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(RouteError::from(ctx).with_location(Location::caller())),
        }
    }
}

pub async fn error_handler(
    err: Box<dyn std::error::Error + Send + Sync + 'static>,
    info: RequestInfo,
) -> hyper::Response<Body> {
    match err.downcast::<RouteError>() {
        Ok(err) => {
            let location = err.location();

            err.span().in_scope(|| match err.should_log() {
                ShouldLog::Yes => {
                    tracing::error!(path = %info.uri(), method = %info.method(), location = %location, error = ?err, "http error")
                }
                ShouldLog::Debug => {
                    tracing::debug!(path = %info.uri(), method = %info.method(), location = %location, error = ?err, "http error")
                }
                ShouldLog::No => (),
            });

            err.response()
        }
        Err(err) => {
            tracing::error!(path = %info.uri(), method = %info.method(), error = ?err, "unhandled http error");
            make_response!(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal Server Error", "success": false })
            )
        }
    }
}
