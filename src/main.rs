//! Affect HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use affect::classifier::device::device_label;
use affect::classifier::{Classifier, EmotionClassifier};
use affect::config::Config;
use affect::gateway::{HandlerState, cors_layer, create_router_with_cors};
use affect::health_check::{health_check_port, run_health_check};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check(health_check_port()).await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model_id = %config.model_id,
        "Affect starting"
    );

    if config.model_path.is_none() {
        tracing::warn!("No AFFECT_MODEL_PATH configured, running classifier in stub mode");
    }

    let classifier_config = config.classifier_config();
    let classifier = tokio::task::spawn_blocking(move || EmotionClassifier::load(classifier_config))
        .await??;

    tracing::info!(
        device = device_label(classifier.device()),
        labels = classifier.labels().len(),
        stub = classifier.is_stub(),
        "Classifier ready"
    );

    let policy = config.ranking_policy();
    tracing::info!(
        threshold = policy.threshold(),
        max_emotions = policy.max_labels(),
        "Ranking policy configured"
    );

    let state = HandlerState::with_policy(Arc::new(classifier), policy);
    let app = create_router_with_cors(state, cors_layer(&config.cors_origins));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Affect shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
