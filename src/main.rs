use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sonar_store::config::{Config, StoreConfig};
use sonar_store::logging::init_tracing;
use sonar_store::{selectors, Action, Store};

#[derive(Debug, Parser)]
#[command(name = "sonar-store", version, about = "Replay front-end store actions")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fold a JSON-lines action log through a fresh store and print the result
    Replay {
        /// File with one action per line
        file: PathBuf,

        /// Print one selector view instead of the whole state
        #[arg(long, value_enum)]
        select: Option<View>,
    },
    /// Validate the config file and print the effective configuration
    CheckConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    AppState,
    CurrentUser,
    GlobalMessages,
    Categories,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging);

    match cli.command {
        Command::Replay { file, select } => {
            let actions = read_actions(&file)?;
            let mut store = Store::from_config(&StoreConfig::from(&config))?;
            for action in actions {
                store.dispatch(action);
            }
            let output = render(&store, select)?;
            println!("{}", output);
        }
        Command::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading action log '{}'", path.display()))?;
    parse_actions(&content).with_context(|| format!("parsing action log '{}'", path.display()))
}

/// One action per line; blank lines are skipped.
fn parse_actions(content: &str) -> Result<Vec<Action>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Action>(line).with_context(|| format!("line {}", index + 1))
        })
        .collect()
}

fn render(store: &Store, select: Option<View>) -> Result<String> {
    let state = store.state();
    let json = match select {
        None => serde_json::to_string_pretty(state)?,
        Some(View::AppState) => serde_json::to_string_pretty(selectors::get_app_state(state))?,
        Some(View::CurrentUser) => {
            serde_json::to_string_pretty(selectors::get_current_user(state))?
        }
        Some(View::GlobalMessages) => {
            serde_json::to_string_pretty(selectors::get_global_messages(state))?
        }
        Some(View::Categories) => {
            serde_json::to_string_pretty(&selectors::get_settings_app_all_categories(state))?
        }
    };
    Ok(json)
}
