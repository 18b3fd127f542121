use anyhow::Result;
use avgcalc_common::shutdown::wait_for_shutdown;
use avgcalc_common::NumberKind;
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::output::{build_table, print_json, theme, OutputMode};

/// Cancels `token` on Ctrl-C. Abort the handle once the guarded work is done.
pub fn cancel_on_shutdown(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_shutdown().await {
            Ok(()) => {
                tracing::info!("interrupt received, cancelling request");
                token.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "could not install signal handler"),
        }
    })
}

#[derive(Serialize)]
struct KindInfo {
    kind: NumberKind,
    path: &'static str,
    label: &'static str,
}

pub fn print_kinds(mode: OutputMode) -> Result<()> {
    let kinds: Vec<KindInfo> = NumberKind::ALL
        .into_iter()
        .map(|kind| KindInfo {
            kind,
            path: kind.path(),
            label: kind.label(),
        })
        .collect();

    match mode {
        OutputMode::Json => print_json(&kinds)?,
        OutputMode::Human => {
            theme::print_banner("Number Kinds");
            let mut table = build_table(&["Kind", "Endpoint", "Description"], &[]);
            for k in &kinds {
                table.add_row(vec![k.kind.as_str(), k.path, k.label]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
