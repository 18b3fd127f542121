use anyhow::Context;
use tracing_subscriber::EnvFilter;

use avgcalc_common::shutdown::wait_for_shutdown;
use avgcalc_gateway::cli::{self, Command};
use avgcalc_gateway::config::{self, GatewayConfig};
use avgcalc_gateway::proxy::ProxyState;
use avgcalc_gateway::rest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = match cli::parse() {
        Ok(Command::Run { config_path }) => config_path,
        Ok(Command::Version) => {
            println!("avgcalc-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let base = match &config_path {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GatewayConfig::default(),
    };
    let config = config::apply_env(base).context("applying environment overrides")?;

    let state = ProxyState::new(&config.proxy).context("building upstream HTTP client")?;
    let app = rest::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        %addr,
        upstream = %config.proxy.upstream,
        prefix = %config.proxy.prefix,
        rewrite_to = %config.proxy.rewrite_to,
        "proxy gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handler failed, running until killed");
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("serving HTTP")?;

    tracing::info!("proxy gateway stopped");
    Ok(())
}
