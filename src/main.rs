use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roadsandlibs::mst::TotalT;
use roadsandlibs::query::{parse_queries, solve_all, Query};
use roadsandlibs::Result;

// solves one query, optionally cross-checking the answer with Kruskal's algorithm
fn solve_query(query: &Query, verify: bool) -> Result<TotalT> {
    if verify {
        query.solve_verified()
    } else {
        query.solve()
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("roadsandlibs")
        .version("0.1.0")
        .about("Minimum cost to give every city access to a library, one answer per query")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Input file path. Reads stdin if not provided."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path. Writes to stdout if not provided."),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .action(ArgAction::SetTrue)
                .help("Solve queries in parallel"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_name("COUNT")
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads for --parallel"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Check every answer against Kruskal's algorithm"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress bar on stderr"),
        )
        .get_matches();

    let parallel = matches.get_flag("parallel");
    let verify = matches.get_flag("verify");

    if let Some(&threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let start = Instant::now();
    let queries = match matches.get_one::<String>("input") {
        Some(path) => parse_queries(BufReader::new(File::open(path)?))?,
        None => parse_queries(io::stdin().lock())?,
    };
    info!(queries = queries.len(), elapsed = ?start.elapsed(), "read input");

    let start = Instant::now();
    let show_progress = matches.get_flag("progress");
    let results: Vec<TotalT> = if show_progress || verify {
        let pb = if show_progress {
            let pb = ProgressBar::new(queries.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")?
                    .progress_chars("█▓░"),
            );
            pb.set_message("Solving queries");
            pb
        } else {
            ProgressBar::hidden()
        };

        let results = if parallel {
            queries
                .par_iter()
                .progress_with(pb.clone())
                .map(|q| solve_query(q, verify))
                .collect::<Result<Vec<_>>>()
        } else {
            queries
                .iter()
                .progress_with(pb.clone())
                .map(|q| solve_query(q, verify))
                .collect::<Result<Vec<_>>>()
        };
        pb.finish();
        results?
    } else {
        solve_all(&queries, parallel)?
    };
    info!(elapsed = ?start.elapsed(), "solved queries");

    let mut out: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for total in results {
        writeln!(out, "{total}")?;
    }
    out.flush()?;

    Ok(())
}
