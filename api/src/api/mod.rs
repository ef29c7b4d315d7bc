use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use hyper::server::conn::Http;
use hyper::Body;
use routerify::{RequestServiceBuilder, Router};
use tokio::net::TcpListener;
use tokio::select;

use self::error::RouteError;
use crate::global::GlobalState;

mod error;
mod ext;
mod macros;
pub mod v1;

pub fn routes(global: &Arc<GlobalState>) -> Router<Body, RouteError> {
    let weak = Arc::downgrade(global);
    Router::builder()
        .data(weak)
        .err_handler_with_info(error::error_handler)
        .scope("/v1", v1::routes(global))
        .build()
        .expect("failed to build router")
}

pub async fn run(global: Arc<GlobalState>) -> Result<()> {
    let addr: SocketAddr = global.config.bind_address.parse()?;

    tracing::info!("listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;

    let request_service =
        RequestServiceBuilder::new(routes(&global)).expect("failed to build request service");

    loop {
        select! {
            _ = global.ctx.done() => {
                return Ok(());
            },
            r = listener.accept() => {
                let (socket, addr) = r?;

                tracing::debug!("accepted connection from {}", addr);

                let service = request_service.build(addr);

                tokio::spawn(async move {
                    Http::new().serve_connection(socket, service).await.ok();
                });
            },
        }
    }
}
