//! Command-line interface for verbfmt
//! Renders or tokenizes format strings using a verb table from a file and/or the command line.
//!
//! Usage:
//!   verbfmt render `<format>` [--config `<file>`] [--prefix `<c>`] [--verb `<v=text>`]...
//!   verbfmt tokens `<format>` [--config `<file>`] [--prefix `<c>`] [--verb `<v=text>`]...
//!
//! Set RUST_LOG (e.g. `RUST_LOG=debug`) to see what the engine is doing.

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use verbfmt::config::VerbTable;

fn table_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("format")
            .help("Format string to process")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Verb table file (YAML, or JSON if it ends in .json)"),
    )
    .arg(
        Arg::new("prefix")
            .long("prefix")
            .short('p')
            .help("Prefix character introducing a verb (default '%')")
            .value_parser(clap::value_parser!(char)),
    )
    .arg(
        Arg::new("verb")
            .long("verb")
            .short('v')
            .help("Verb substitution as VERB=TEXT, e.g. 's=world'")
            .action(ArgAction::Append)
            .value_parser(parse_verb),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("verbfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render format strings with single-character verbs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(table_args(
            Command::new("render").about("Render a format string to stdout"),
        ))
        .subcommand(table_args(
            Command::new("tokens").about("Print the tokens of a format string as JSON"),
        ))
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        _ => unreachable!(),
    }
}

/// Parse a `VERB=TEXT` argument
fn parse_verb(arg: &str) -> Result<(char, String), String> {
    let (verb, text) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected VERB=TEXT, got '{arg}'"))?;

    let mut chars = verb.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((c, text.to_string())),
        _ => Err(format!("verb must be a single character, got '{verb}'")),
    }
}

/// Build the verb table from --config, then apply --prefix and --verb on top
fn load_table(matches: &ArgMatches) -> VerbTable {
    let mut table = match matches.get_one::<String>("config") {
        Some(path) => VerbTable::load(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => VerbTable::new(),
    };

    if let Some(prefix) = matches.get_one::<char>("prefix") {
        table.prefix = Some(*prefix);
    }

    if let Some(verbs) = matches.get_many::<(char, String)>("verb") {
        for (verb, text) in verbs {
            table.insert(*verb, text.clone());
        }
    }

    table
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) {
    let format = matches.get_one::<String>("format").unwrap();
    let table = load_table(matches);

    let mut format_fn = table.builder().build();
    match format_fn.format(format, Some(&table)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if let Some(partial) = e.partial() {
                tracing::debug!(partial, "partial output before failure");
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) {
    let format = matches.get_one::<String>("format").unwrap();
    let table = load_table(matches);

    let mut format_fn = table.builder().build();
    let tokens = format_fn.tokenize(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Error serializing tokens: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
