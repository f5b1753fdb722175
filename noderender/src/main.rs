//! # noderender
//!
//! A CLI for describing cluster nodes, their resource usage, and node status
//! events as a table, JSON, or YAML.
//!
//! ## Overview
//!
//! noderender is built on top of noderenderlib. It reads records as JSON lines
//! (one object per line) from a file or stdin, which is how the cluster client
//! hands them over, and renders them while they stream in.
//!
//! ## Usage
//!
//! ```bash
//! # Table of nodes from stdin
//! cluster-client nodes --jsonl | noderender nodes
//!
//! # Include the info column
//! noderender nodes --info -i nodes.jsonl
//!
//! # Resource summaries as YAML
//! noderender resources -o yaml -i resources.jsonl
//!
//! # Status events, one log line each
//! noderender status -i events.jsonl
//!
//! # Output mode from the environment (the flag wins when both are set)
//! NODERENDER_OUTPUT=json noderender nodes -i nodes.jsonl
//! ```

mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::{Style, Term};
use noderenderlib::{
    describe_node_resources, describe_nodes, describe_status_events, NodeRecord,
    NodeViewOptions, OutputMode, ResourceSummary, StatusEvent,
};
use tracing_subscriber::EnvFilter;

use input::{read_records, STDIN};

/// Environment variable consulted when `--output` is not given
const OUTPUT_ENV: &str = "NODERENDER_OUTPUT";

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .env(OUTPUT_ENV)
        .value_parser(OutputMode::NAMES)
        .default_value("table")
        .help("Output format")
}

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .default_value(STDIN)
        .help("JSON-lines input file ('-' for stdin)")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("noderender")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Describe cluster nodes, resource usage and status events")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("nodes")
                .about("Describe nodes: endpoint, status and resources")
                .arg(output_arg())
                .arg(input_arg())
                .arg(
                    Arg::new("info")
                        .long("info")
                        .action(ArgAction::SetTrue)
                        .help("Add the node info column"),
                ),
        )
        .subcommand(
            Command::new("resources")
                .about("Describe per-node resource utilization")
                .arg(output_arg())
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Report node status events")
                .arg(output_arg())
                .arg(input_arg()),
        )
}

/// Resolve the output mode once for this invocation
fn extract_output_mode(matches: &ArgMatches) -> anyhow::Result<OutputMode> {
    let name = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");
    name.parse().map_err(anyhow::Error::msg)
}

fn extract_input(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or(STDIN)
}

/// Handler for nodes command
fn nodes_handler(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let mode = extract_output_mode(matches)?;
    let options = NodeViewOptions::new().with_info(matches.get_flag("info"));
    let source = read_records::<NodeRecord>(extract_input(matches))?;

    describe_nodes(&source.records, options, mode, out)?;
    source.finish()?;
    Ok(())
}

/// Handler for resources command
fn resources_handler(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let mode = extract_output_mode(matches)?;
    let source = read_records::<ResourceSummary>(extract_input(matches))?;

    describe_node_resources(&source.records, mode, out)?;
    source.finish()?;
    Ok(())
}

/// Handler for status command
fn status_handler(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let mode = extract_output_mode(matches)?;
    let source = read_records::<StatusEvent>(extract_input(matches))?;

    describe_status_events(&source.records, mode, out)?;
    source.finish()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(Term::stdout().is_term())
        .with_target(false)
        .without_time()
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("nodes", sub)) => nodes_handler(sub, &mut out)?,
        Some(("resources", sub)) => resources_handler(sub, &mut out)?,
        Some(("status", sub)) => status_handler(sub, &mut out)?,
        _ => unreachable!("clap requires a subcommand"),
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{label} {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_output_mode_flag() {
        let matches = build_command()
            .try_get_matches_from(["noderender", "nodes", "-o", "yaml"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(extract_output_mode(sub).unwrap(), OutputMode::Yaml);
    }

    #[test]
    fn test_unknown_output_mode_rejected() {
        let result =
            build_command().try_get_matches_from(["noderender", "resources", "--output", "csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let matches = build_command()
            .try_get_matches_from(["noderender", "status"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "status");
        assert_eq!(extract_input(sub), STDIN);
    }

    #[test]
    fn test_info_flag() {
        let matches = build_command()
            .try_get_matches_from(["noderender", "nodes", "--info"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("info"));
    }
}
