mod cli;
mod convert;

use anyhow::Result;
use clap::Parser;
use log::debug;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    debug!("Arguments: {:?}", cli);

    let input = convert::read_input(cli.input_path().map(|path| path.as_path()))?;
    let tree = convert::parse_tree(&input)?;
    println!("{}", convert::format_tree(&tree, cli.format)?);

    Ok(())
}
