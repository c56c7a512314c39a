mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod github;
mod output;
mod utils;

use std::io;

use chrono::Local;
use clap::Parser;

use cli::Cli;
use config::Config;
use error::AppError;
use github::{Credentials, GitHubClient};
use output::OutputPaths;
use utils::{debug_log, run_stamp, set_debug};

fn main() {
    // Fixed once so every file this run writes shares the same stamp.
    let stamp = run_stamp(&Local::now());

    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);
    if let Some(path) = &config.source {
        debug_log(format_args!("loaded config from {}", path.display()));
    }

    if let Err(e) = run(&cli, stamp) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, stamp: String) -> Result<(), AppError> {
    let request = cli.traffic_request()?;
    let paths = OutputPaths::new(cli.data_dir(), stamp);
    if request.save_csv {
        debug_log(format_args!("csv log: {}", paths.csv_path(&request.op).display()));
    }

    let password = rpassword::prompt_password("Password: ").map_err(AppError::Password)?;
    let client = GitHubClient::new(
        cli.api_base(),
        Credentials {
            username: cli.username().to_string(),
            password,
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&client, &request, &paths, &mut out)?;
    Ok(())
}
