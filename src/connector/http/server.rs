use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

use crate::connector::api::Container;

use super::{form, handlers};

pub const DEFAULT_PORT: u16 = 5000;

pub fn routes(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(form::show_form).post(form::submit_form))
        .route("/generate_sql", post(handlers::generate_sql))
        .route("/get_sql_query", get(handlers::get_sql_query))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("sqlgen listening on http://{}", listener.local_addr()?);
    axum::serve(listener, routes(container)).await?;
    Ok(())
}
