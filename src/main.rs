use std::io::IsTerminal;

use clap::{Arg, ArgAction, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use molar::error::MolarError;
use molar::output;
use molar::rendering::{Identity, Render, Syntax, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("molar")
        .version(VERSION)
        .about("Compute the molar mass of chemical formulas.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debugging information to standard error."),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .action(ArgAction::SetTrue)
                .help("Write counts in the canonical formula as ordinary digits rather than subscripts."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
        )
        .arg(
            Arg::new("formula")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Chemical formula, for example C6H12O6 or Ca(OH)2. Several may be given."),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let plain = matches.get_flag("plain");
    let raw = matches.get_flag("raw-control-chars");

    let stdout: &dyn Render = if raw || std::io::stdout().is_terminal() {
        &Terminal
    } else {
        &Identity
    };
    let stderr: &dyn Render = if raw || std::io::stderr().is_terminal() {
        &Terminal
    } else {
        &Identity
    };

    let formulas: Vec<&String> = matches
        .get_many::<String>("formula")
        .map(|values| values.collect())
        .unwrap_or_default();

    let mut failed = false;

    for formula in formulas {
        debug!(?formula);

        match molar::analyse(formula) {
            Ok(analysis) => match output::report(&analysis, stdout, plain) {
                Ok(text) => println!("{}", text),
                Err(error) => {
                    eprintln!("{}: {}", stderr.style(Syntax::Error, "error"), error);
                    failed = true;
                }
            },
            Err(error) => {
                let error = MolarError::new(formula, &error);
                eprintln!("{}", error.full_details(stderr));
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
