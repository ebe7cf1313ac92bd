use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fol_resolve::driver::prove;
use fol_resolve::io::{read_input, write_output};
use fol_resolve::prepare::prepare_knowledge_base;
use fol_resolve::resolver::DEFAULT_KILL_LIMIT;

/// Answers ground first-order-logic queries against a knowledge base by
/// resolution refutation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file listing the queries and knowledge-base sentences.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Output file receiving one TRUE/FALSE line per query.
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Raise logging verbosity. Logs always go to stderr, never output.txt.
    #[arg(short, long)]
    verbose: bool,

    /// Overrides the clause-count cutoff for this run.
    #[arg(long, default_value_t = DEFAULT_KILL_LIMIT)]
    kill_limit: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), fol_resolve::Error> {
    let input = read_input(&args.input)?;
    let kb = prepare_knowledge_base(&input.sentences)?;

    let mut results = Vec::with_capacity(input.queries.len());
    for query in &input.queries {
        let proved = prove(&kb, query, args.kill_limit);
        info!(query = %query, proved, "answered query");
        results.push(proved);
    }

    write_output(&args.output, &results)?;
    Ok(())
}
