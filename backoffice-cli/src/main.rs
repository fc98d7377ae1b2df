mod cli;
mod error;
mod menu;
mod paths;
mod view;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use cli::{Cli, Command};

/// Log to `latest.log` in the cache directory. Runs without a log when the
/// directory is unavailable.
fn init_logging(verbose: bool) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path.display(), e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("Starting {:?}", cli.command);

    let result = match &cli.command {
        Command::View(args) => view::run(args),
        Command::Menu(args) => menu::run(args),
    };

    match result {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
