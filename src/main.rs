use std::io;

use anyhow::Result;
use clap::Parser;

use tintpad::cli::{self, CliArgs};
use tintpad::config::EditorConfig;

fn main() -> Result<()> {
    tintpad::tracing::init();

    let args = CliArgs::parse();
    let config = EditorConfig::load();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args.command, config, &mut out)
}
