//! trunkline — interactive operator console for a switchboard network

mod commands;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use trunkline_switch_core::prelude::*;
use trunkline_switch_core::report::LineStatus;
use trunkline_switch_store::{load_network, save_network};

use commands::{Command, ParseError, HELP};

/// Operate a circuit-switched telephone network from the terminal
#[derive(Debug, Parser)]
#[command(name = "trunkline", version, about)]
struct Args {
    /// Number of digits an area code must have
    #[arg(long, default_value_t = 3)]
    area_digits: u8,

    /// Load a saved network before starting the console
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,
}

/// One row of the `display` table
#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Switchboard")]
    board: String,
    #[tabled(rename = "Trunks")]
    trunks: String,
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let policy = AreaCodePolicy::new(args.area_digits);

    let mut network = match &args.load {
        Some(path) => load_network(path, policy)
            .with_context(|| format!("failed to load network from {}", path.display()))?,
        None => Network::with_policy(policy),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("trunkline> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match Command::parse(&line, network.policy()) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        };
        if matches!(command, Command::Quit) {
            break;
        }
        if let Err(err) = dispatch(&mut network, command) {
            match err.downcast_ref::<SwitchError>() {
                // A broken invariant is a bug in the core, not an operator
                // mistake; do not keep running on corrupted state.
                Some(e) if !e.is_recoverable() => return Err(err),
                _ => eprintln!("{}", err.to_string().red()),
            }
        }
    }

    Ok(())
}

/// Run one command against the network
fn dispatch(network: &mut Network, command: Command) -> Result<()> {
    debug!(?command, "dispatching");
    match command {
        Command::SwitchAdd { code } => {
            let code = network.add_switchboard(&code)?;
            println!("{}", format!("Added switchboard {}.", code).green());
        }
        Command::SwitchConnect { a, b } => {
            let a = network.policy().parse(&a)?;
            let b = network.policy().parse(&b)?;
            network.link_switchboards(&a, &b)?;
            println!("{}", format!("Trunk link created between {} and {}.", a, b).green());
        }
        Command::PhoneAdd { at } => {
            network.add_line(&at.area, at.number.clone())?;
            println!("{}", format!("Added phone {}.", at).green());
        }
        Command::StartCall { src, dst } => {
            start_call(network, &src, &dst)?;
            println!("{}", format!("{} and {} are now connected.", src, dst).green());
        }
        Command::EndCall { at } => {
            let far = end_call(network, &at)?;
            println!("{}", format!("Hung up; {} and {} are now idle.", at, far).green());
        }
        Command::NetworkSave { path } => {
            save_network(network, &path)
                .with_context(|| format!("failed to save network to {}", path.display()))?;
            println!("{}", format!("Network saved to {}.", path.display()).green());
        }
        Command::NetworkLoad { path } => {
            *network = load_network(&path, network.policy())
                .with_context(|| format!("failed to load network from {}", path.display()))?;
            println!("{}", format!("Network loaded from {}.", path.display()).green());
        }
        Command::Display { json } => {
            let report = NetworkReport::of(network);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.switchboards.is_empty() {
                println!("{}", "The network has no switchboards yet.".yellow());
            } else {
                println!("{}", render_table(&report));
            }
        }
        Command::Help => println!("{}", HELP),
        // Quit is handled by the input loop.
        Command::Quit => {}
    }
    Ok(())
}

/// Render the network report as a table, one row per line
///
/// Boards without lines still get a row so their trunk links are visible.
fn render_table(report: &NetworkReport) -> String {
    let mut rows = Vec::new();
    for board in &report.switchboards {
        let trunks = if board.trunks.is_empty() {
            "-".to_string()
        } else {
            board.trunks.join(", ")
        };
        if board.lines.is_empty() {
            rows.push(LineRow {
                board: board.area_code.clone(),
                trunks,
                line: "-".to_string(),
                status: "-".to_string(),
            });
            continue;
        }
        for line in &board.lines {
            rows.push(LineRow {
                board: board.area_code.clone(),
                trunks: trunks.clone(),
                line: line.number.clone(),
                status: match &line.status {
                    LineStatus::Idle => "idle".to_string(),
                    LineStatus::Connected { peer } => format!("connected to {}", peer),
                },
            });
        }
    }
    Table::new(rows).with(Style::rounded()).to_string()
}
