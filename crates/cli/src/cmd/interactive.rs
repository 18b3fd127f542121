use std::io::Write;

use anyhow::{Context, Result};
use avgcalc_client::Session;
use avgcalc_common::shutdown::wait_for_shutdown;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use super::helpers;
use crate::output::{render_state, spinner, theme, OutputMode};

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Quit,
    Reset,
    Help,
    Fetch(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => Self::Empty,
            "q" | "quit" | "exit" => Self::Quit,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            _ => Self::Fetch(word),
        }
    }
}

pub async fn execute(mode: OutputMode, mut session: Session) -> Result<()> {
    if mode == OutputMode::Human {
        theme::print_banner("Average Calculator");
        theme::print_kv("Service", session.client().base_url());
        theme::print_kv("Window size", &session.state().capacity.to_string());
        theme::print_hint("Type a kind (primes, fibo, even, rand), 'reset', 'help' or 'quit'.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if mode == OutputMode::Human {
            print!("> ");
            std::io::stdout().flush().context("flushing prompt")?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = wait_for_shutdown() => None,
        };
        let Some(line) = line else { break };

        match Input::parse(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => helpers::print_kinds(mode)?,
            Input::Reset => render_state(session.reset(), mode)?,
            Input::Fetch(name) => {
                let cancel = CancellationToken::new();
                let watcher = helpers::cancel_on_shutdown(cancel.clone());
                let sp = match mode {
                    OutputMode::Human => Some(spinner::create(&format!("Fetching {name}..."))),
                    OutputMode::Json => None,
                };

                let state = session.request_named(&name, &cancel).await;

                watcher.abort();
                if let Some(sp) = sp {
                    spinner::finish_clear(&sp);
                }
                render_state(state, mode)?;
            }
        }
    }

    Ok(())
}
