use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use hexview::cli::Cli;
use hexview::config::Config;
use hexview::dump;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Invoked bare: show usage and fail, without touching any file.
    if std::env::args_os().len() < 2 {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    // clap exits with 2 on parse errors; this tool reports every failure as 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_usage_error = err.use_stderr();
            err.print()?;
            std::process::exit(if is_usage_error { 1 } else { 0 });
        }
    };

    let config = Config::from_cli(cli)?;
    dump::dump_file(&config)?;
    Ok(())
}
