use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: avgcalc-gateway [OPTIONS]

Options:
  -c, --config <PATH>  Configuration file path (YAML)
  -V, --version        Print version
  -h, --help           Print help

Environment:
  PORT                 Listen port (default 3001)
  GATEWAY_UPSTREAM     Upstream origin (default http://20.244.56.144)
  RUST_LOG             Log filter (default info)";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run { config_path: Option<PathBuf> },
    Version,
    Help,
}

pub fn parse() -> Result<Command, String> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--config requires a path argument".to_string())?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(Command::Run { config_path })
}
