//! Rubric evaluation HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use rubric_eval::config::Config;
use rubric_eval::gateway::{HandlerState, create_router_with_state};
use rubric_eval::judge::{LlmJudge, MockJudge};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
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
        judge_model = %config.judge_model,
        judge_timeout_secs = config.judge_timeout.as_secs(),
        "Rubric evaluator starting"
    );

    let app = build_app(&config)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Rubric evaluator shutdown complete");
    Ok(())
}

fn build_app(config: &Config) -> anyhow::Result<Router> {
    if config.mock_judge {
        tracing::warn!("EVALUATOR_MOCK_JUDGE set, scoring with the deterministic mock judge");
        let state = HandlerState::new(MockJudge::new(), config.judge_timeout);
        return Ok(create_router_with_state(state));
    }

    let judge = LlmJudge::from_config(config)?;
    let state = HandlerState::new(judge, config.judge_timeout);
    Ok(create_router_with_state(state))
}

async fn run_health_check() -> i32 {
    let port = std::env::var("EVALUATOR_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
