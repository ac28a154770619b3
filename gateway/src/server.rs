use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::errors::app_error::{AppError, AppResult};
use crate::handlers::api::health_check;
use crate::routes;
use crate::state::AppState;

/// Assemble the full application router: health check plus webhook.
pub fn build_router(state: Arc<AppState>) -> Router {
    let public_routes = Router::new().route("/", get(health_check));

    // Security headers
    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ));

    public_routes
        .merge(routes::webhooks::create_webhook_router())
        .with_state(state)
        .layer(security_headers)
}

/// Start the gateway and serve until the listener fails.
pub async fn start_server(config: ServerConfig) -> AppResult<()> {
    let state = AppState::new(config)?;
    let socket_addr = socket_addr(&state.config)?;
    let tls = state.config.tls.clone();

    let app = build_router(state);

    match tls {
        Some(tls) => {
            let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .map_err(|e| {
                    AppError::Config(format!(
                        "Failed to load TLS certificates from {} and {}: {}",
                        tls.cert_path.display(),
                        tls.key_path.display(),
                        e
                    ))
                })?;

            info!("Server listening on https://{} (TLS enabled)", socket_addr);
            axum_server::bind_rustls(socket_addr, rustls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            let listener = TcpListener::bind(&socket_addr).await?;
            serve(listener, app).await?;
        }
    }

    Ok(())
}

fn socket_addr(config: &ServerConfig) -> AppResult<SocketAddr> {
    let address = config.address();
    address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address '{address}': {e}")))
}

/// Serve `app` on an already bound plain-HTTP listener.
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
