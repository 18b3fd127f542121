use anyhow::Result;
use avgcalc_client::Session;
use clap::Args;
use tokio_util::sync::CancellationToken;

use super::helpers;
use crate::output::{render_state, spinner, OutputMode};

#[derive(Args)]
pub struct FetchArgs {
    #[arg(required = true, help = "Kinds to fetch, in order")]
    pub kinds: Vec<String>,
}

pub async fn execute(args: &FetchArgs, mode: OutputMode, mut session: Session) -> Result<()> {
    let cancel = CancellationToken::new();
    let watcher = helpers::cancel_on_shutdown(cancel.clone());

    let mut failures = 0usize;
    for name in &args.kinds {
        let sp = match mode {
            OutputMode::Human => Some(spinner::create(&format!("Fetching {name}..."))),
            OutputMode::Json => None,
        };

        let state = session.request_named(name, &cancel).await;

        if let Some(sp) = sp {
            spinner::finish_clear(&sp);
        }
        if state.error.is_some() {
            failures += 1;
        }
        render_state(state, mode)?;

        if cancel.is_cancelled() {
            break;
        }
    }
    watcher.abort();

    if failures > 0 {
        anyhow::bail!("{failures} of {} fetches failed", args.kinds.len());
    }
    Ok(())
}
