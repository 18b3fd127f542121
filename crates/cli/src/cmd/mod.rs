mod fetch;
pub(crate) mod helpers;
pub(crate) mod interactive;
pub(crate) mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one or more kinds (primes, fibo, even, rand) in order
    Fetch(fetch::FetchArgs),
    /// Read kinds from stdin, one per line
    #[command(alias = "repl")]
    Interactive,
    /// List the available number kinds
    Kinds,
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Fetch(ref args) => fetch::execute(args, mode, opts.session()?).await,
        Commands::Interactive => interactive::execute(mode, opts.session()?).await,
        Commands::Kinds => helpers::print_kinds(mode),
        Commands::Version => version::execute(mode),
    }
}
