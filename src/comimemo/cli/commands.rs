//! # CLI Layer
//!
//! This module is **one possible UI client** for comimemo. It is the only place that:
//! - Parses arguments and session lines
//! - Writes to stdout / stderr
//! - Decides exit codes
//!
//! ## Flow
//!
//! 1. `init_context()` loads the config and seeds a registry (sample circles, a seed file,
//!    or nothing)
//! 2. One-shot commands run once against that registry and print the result
//! 3. `session` keeps the registry alive and reads one command per line from stdin until
//!    `quit` or end of input
//!
//! After every mutation the full list is re-rendered from the registry, so the positions
//! on screen are always the ones the next `delete` will use.

use super::logger::init_logger;
use super::print::{print_choices, print_circles, print_config, print_messages};
use super::setup::{
    split_line, CircleCommands, Cli, Commands, MiscCommands, SessionCommand, SessionLine,
};
use clap::Parser;
use comimemo::api::{CircleApi, ConfigAction};
use comimemo::config::{config_dir, ComimemoConfig};
use comimemo::error::Result;
use comimemo::registry::CircleRegistry;
use comimemo::sample::sample_circles;
use comimemo::seed::load_seed;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

struct AppContext {
    api: CircleApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Circle(cmd)) => handle_circle_command(&mut ctx, cmd),
        Some(Commands::Misc(MiscCommands::Session)) => handle_session(&mut ctx),
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            handle_config(&ctx, key, value)
        }
        None => handle_circle_command(&mut ctx, CircleCommands::List),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ComimemoConfig::load(&config_dir)?;

    let seed = if cli.empty {
        Vec::new()
    } else if let Some(path) = cli.seed.as_ref().or(config.seed_file.as_ref()) {
        load_seed(path)?
    } else {
        sample_circles()
    };

    let registry = CircleRegistry::from_seed(seed).with_policy(config.add_policy());
    debug!(config_dir = %config_dir.display(), policy = ?registry.policy(), "context ready");

    Ok(AppContext {
        api: CircleApi::new(registry, config_dir),
    })
}

fn handle_circle_command(ctx: &mut AppContext, command: CircleCommands) -> Result<()> {
    match command {
        CircleCommands::List => {}
        CircleCommands::Sort => {
            let result = ctx.api.sort_circles();
            print_messages(&result.messages);
        }
        CircleCommands::Add(args) => {
            let result = ctx.api.add_circle(&args.into_draft())?;
            print_messages(&result.messages);
        }
        CircleCommands::Delete { positions } => {
            let result = ctx.api.delete_circles(&positions)?;
            print_messages(&result.messages);
        }
        CircleCommands::Choices => {
            print_choices(&ctx.api.choices().choices);
            return Ok(());
        }
    }

    print_circles(&ctx.api.list_circles().listed_circles);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        print_circles(&ctx.api.list_circles().listed_circles);
        println!("Type `help` for commands, `quit` to leave.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words = match split_line(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match SessionLine::try_parse_from(words) {
            Ok(SessionLine {
                command: SessionCommand::Quit,
            }) => break,
            Ok(SessionLine {
                command: SessionCommand::Circle(cmd),
            }) => {
                if let Err(e) = handle_circle_command(ctx, cmd) {
                    eprintln!("Error: {}", e);
                }
            }
            // Covers both `help` output and usage errors
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
