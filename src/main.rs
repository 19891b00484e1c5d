use {
    ayur_admin::{
        AppState,
        adapters::{routes, session_store::FileSessionStore, strapi_client::StrapiClient},
        config::Config,
    },
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("invalid configuration");

    let client = StrapiClient::new(&config.api_domain, config.upstream_timeout)
        .expect("failed to build content API client");
    let session = FileSessionStore::new(&config.session_file);
    tracing::info!(
        api_domain = %config.api_domain,
        session_file = %session.path().display(),
        "starting admin service"
    );

    let state = AppState::new(Arc::new(client), Arc::new(session));

    // Upstream timeout plus headroom for dedup and serialization.
    let request_timeout = config.upstream_timeout + Duration::from_secs(5);
    let app = routes::router(state).layer(TimeoutLayer::new(request_timeout));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
