use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

use fa_utilities::FaError;

use crate::definition::DfaArgs;
use crate::verbosity::VerbosityFlag;

mod definition;
mod verbosity;

#[derive(clap::Parser, Debug)]
#[command(
    name = "fa-dfa",
    about = "A command line tool for deterministic finite automata"
)]
struct Cli {
    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[command(subcommand)]
    commands: Commands,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    Accepts(AcceptsArgs),
    Swap(SwapArgs),
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
#[command(about = "Decides for every input whether the automaton accepts it, use 'e' for the empty string")]
struct AcceptsArgs {
    #[command(flatten)]
    dfa: DfaArgs,

    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints the automaton with the transitions on the two symbols exchanged")]
struct SwapArgs {
    #[command(flatten)]
    dfa: DfaArgs,

    first: char,

    second: char,
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints the automaton")]
struct ShowArgs {
    #[command(flatten)]
    dfa: DfaArgs,
}

fn main() -> Result<ExitCode, FaError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    match cli.commands {
        Commands::Accepts(args) => {
            let dfa = args.dfa.build()?;

            for input in &args.inputs {
                let accepted = dfa.accepts(input)?;
                println!("{input}: {}", if accepted { "accepted" } else { "rejected" });
            }
        }
        Commands::Swap(args) => {
            let dfa = args.dfa.build()?;
            println!("{}", dfa.swap(args.first, args.second).render()?);
        }
        Commands::Show(args) => {
            let dfa = args.dfa.build()?;
            println!("{}", dfa.render()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
