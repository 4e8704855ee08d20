mod favorites;
mod state;
mod update;

use crate::state::TickerState;
use chrono::Utc;
use log::info;
use scoreboard_api::client::ScoreboardApi;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = data_path();
    let mut state = TickerState::load(&path)?;

    let api = ScoreboardApi::new();
    update::run_update(&api, &mut state, Utc::now()).await;

    state.save(&path)?;
    info!("updated {}", path.display());
    Ok(())
}

fn data_path() -> PathBuf {
    resolve_data_path(std::env::var("TICKER_DATA_JSON").ok())
}

/// Default to data.json beside the binary, so a cron invocation finds the
/// same file regardless of its working directory. The env override wins.
fn resolve_data_path(override_path: Option<String>) -> PathBuf {
    if let Some(p) = override_path.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(p);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data.json")))
        .unwrap_or_else(|| PathBuf::from("data.json"))
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("office-ticker {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "office-ticker - scoreboard updater for the office ticker

Reads the persisted ticker JSON, polls the ESPN scoreboards for
NFL / NHL / MLB / NCAA football, and writes the file back. Meant to be
invoked periodically (cron or similar).

Usage:
  office-ticker
  office-ticker --help
  office-ticker --version

Environment:
  TICKER_DATA_JSON   Path to the persisted ticker JSON
                     (default: data.json beside the binary)
  RUST_LOG           Log filter (default info)"
}
