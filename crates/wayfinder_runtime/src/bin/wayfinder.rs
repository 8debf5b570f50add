//! Wayfinder CLI entry point: plays the demo adventure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use wayfinder_foundation::Result;
use wayfinder_runtime::demo::{self, DEMO_DATA, DEMO_SOURCE, DemoWorld};
use wayfinder_runtime::{Repl, ReplConfig};
use wayfinder_world::AdventureData;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "A tiny text adventure: find your way out of the dark room")]
#[command(version)]
struct Cli {
    /// World data file to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Do not install the `help` and `?` commands
    #[arg(long)]
    no_help: bool,

    /// Print plain text without colour
    #[arg(long)]
    no_color: bool,

    /// Text shown before each command
    #[arg(short, long)]
    prompt: Option<String>,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn config(cli: &Cli) -> ReplConfig {
    let mut config = ReplConfig::default().with_help(!cli.no_help);
    if cli.no_color {
        config = config.with_color(false);
    }
    if let Some(prompt) = &cli.prompt {
        config = config.with_prompt(prompt);
    }
    config
}

fn run(cli: &Cli) -> Result<()> {
    let data = match &cli.data {
        Some(path) => AdventureData::load(path)?,
        None => AdventureData::parse(DEMO_DATA, DEMO_SOURCE)?,
    };
    info!("playing {}", data.source());

    let world = DemoWorld::build(&data)?;
    let mut repl = Repl::new(world, config(cli))?;
    demo::register(&mut repl)?;

    let game = repl.game_mut();
    demo::style(game);
    demo::look(game)?;
    game.console.blank_line()?;

    repl.run()
}
