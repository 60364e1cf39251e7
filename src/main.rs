//! CLI entry point for building and enumerating transmission margins

use clap::Parser;
use marginweave::io::cli::{Cli, CommandRunner};

fn main() -> marginweave::Result<()> {
    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
