use std::sync::{Arc, Weak};

use hyper::StatusCode;
use routerify::prelude::RequestExt as _;

use super::error::RouteError;
use crate::global::GlobalState;

pub trait RequestExt {
    /// Returns the global state attached to the router.
    ///
    /// The router holds a weak reference so that open keep-alive connections
    /// cannot keep the state alive past shutdown; an upgrade failure means we
    /// are shutting down.
    fn get_global(&self) -> Result<Arc<GlobalState>, RouteError>;
}

impl RequestExt for hyper::Request<hyper::Body> {
    fn get_global(&self) -> Result<Arc<GlobalState>, RouteError> {
        self.data::<Weak<GlobalState>>()
            .expect("global state not set")
            .upgrade()
            .ok_or_else(|| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to upgrade global state",
                )
                    .into()
            })
    }
}
