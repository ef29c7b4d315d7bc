use std::sync::Arc;

use hyper::Body;
use routerify::Router;

use super::error::RouteError;
use crate::global::GlobalState;

pub mod health;
pub mod polls;

pub fn routes(global: &Arc<GlobalState>) -> Router<Body, RouteError> {
    Router::builder()
        .scope("/health", health::routes(global))
        .scope("/polls", polls::routes(global))
        .build()
        .expect("failed to build router")
}
