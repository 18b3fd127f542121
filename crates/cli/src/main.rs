mod cmd;
mod output;
#[cfg(test)]
mod tests;

use std::time::Duration;

use anyhow::{Context, Result};
use avgcalc_client::{NumberClient, Session, DEFAULT_BASE_URL};
use avgcalc_common::WINDOW_SIZE;
use clap::Parser;
use cmd::Commands;
use output::OutputMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avgcalc", version, about = "Sliding-window average calculator")]
pub struct Opts {
    #[clap(subcommand)]
    cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(
        long,
        global = true,
        env = "AVGCALC_API_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the number service (normally the gateway)"
    )]
    api_url: String,

    #[arg(long, global = true, default_value_t = 500, help = "Request timeout in milliseconds")]
    timeout_ms: u64,

    #[arg(
        long,
        global = true,
        default_value_t = WINDOW_SIZE,
        value_parser = parse_window_size,
        help = "Number of values kept in the sliding window"
    )]
    window_size: usize,
}

impl Opts {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    pub fn session(&self) -> Result<Session> {
        let client = NumberClient::new(&self.api_url)
            .context("building HTTP client")?
            .with_timeout(Duration::from_millis(self.timeout_ms));
        Ok(Session::new(client, self.window_size))
    }
}

fn parse_window_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("window size must be at least 1".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    cmd::run(opts).await
}
