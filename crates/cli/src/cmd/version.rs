use anyhow::Result;

use crate::output::{print_json, theme, OutputMode};
use serde::Serialize;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    arch: &'static str,
    os: &'static str,
}

pub fn execute(mode: OutputMode) -> Result<()> {
    let info = VersionInfo {
        name: "avgcalc",
        version: env!("CARGO_PKG_VERSION"),
        arch: std::env::consts::ARCH,
        os: std::env::consts::OS,
    };

    match mode {
        OutputMode::Json => print_json(&info)?,
        OutputMode::Human => {
            theme::print_banner("Average Calculator");
            theme::print_kv("Version", info.version);
            theme::print_kv("Arch", info.arch);
            theme::print_kv("OS", info.os);
            println!();
        }
    }
    Ok(())
}
