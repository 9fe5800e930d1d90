//! CLI command implementations
//!
//! Every command loads both data files, builds the database once, and
//! then only reads from it.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::database::{ApproachView, NeoDatabase};
use crate::extract::{load_approaches, load_neos};
use crate::filters::{create_filters, FilterResult};
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope};
use crate::query::limit;
use crate::write::write_results;

use super::args::{Cli, Command, InspectTarget, QueryArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Input files after applying command-line overrides to the config
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub neo_file: PathBuf,
    pub cad_file: PathBuf,
}

impl DataPaths {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            neo_file: cli.neofile.clone().unwrap_or_else(|| config.neo_file.clone()),
            cad_file: cli.cadfile.clone().unwrap_or_else(|| config.cad_file.clone()),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    Logger::set_min_severity(config.log_severity()?);
    log_event_with_fields(Event::ConfigLoaded, &[("log_level", &config.log_level)]);

    let paths = DataPaths::resolve(&cli, &config);
    let db = load_database(&paths)?;
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Inspect { target, verbose } => inspect(&db, target, *verbose, &mut stdout),
        Command::Query(args) => query(&db, args, &config, &mut stdout),
    }
}

/// Loads both data files and builds the database
pub fn load_database(paths: &DataPaths) -> CliResult<NeoDatabase> {
    let neos = load_neos(&paths.neo_file)?;
    let approaches = load_approaches(&paths.cad_file)?;
    Ok(NeoDatabase::new(neos, approaches))
}

/// Prints one NEO, and with `verbose` each of its close approaches.
///
/// A missing NEO is reported on `out`, not treated as an error.
pub fn inspect<W: Write>(
    db: &NeoDatabase,
    target: &InspectTarget,
    verbose: bool,
    out: &mut W,
) -> CliResult<()> {
    let neo = match (&target.pdes, &target.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        writeln!(out, "No matching NEOs exist in the database.")?;
        return Ok(());
    };

    writeln!(out, "{}", neo)?;
    if verbose {
        for approach in db.approaches_of(neo) {
            writeln!(out, "- {}", approach)?;
        }
    }
    Ok(())
}

/// Runs a query and prints the results to `out`, or writes them to
/// `--outfile`.
///
/// Printed output is capped at `--limit`, falling back to the configured
/// stdout cap. File output is capped only by `--limit`.
pub fn query<W: Write>(
    db: &NeoDatabase,
    args: &QueryArgs,
    config: &Config,
    out: &mut W,
) -> CliResult<()> {
    let filters = create_filters(&args.criteria());
    let filter_count = filters.len().to_string();
    let scope = ObservationScope::with_fields("QUERY", &[("filters", &filter_count)]);
    for filter in &filters {
        Logger::trace("QUERY_FILTER", &[("filter", &filter.to_string())]);
    }

    let results = db.query(&filters);

    let outcome = match &args.outfile {
        Some(path) => write_results(limit(results, args.limit), path).map_err(CliError::from),
        None => print_results(limit(results, args.limit.or(Some(config.stdout_limit))), out),
    };

    match outcome {
        Ok(written) => {
            scope.complete_with_fields(&[("results", &written.to_string())]);
            Ok(())
        }
        Err(e) => {
            scope.fail(e.message());
            Err(e)
        }
    }
}

/// Prints each result on its own line. Returns the number printed.
fn print_results<'a, I, W>(results: I, out: &mut W) -> CliResult<usize>
where
    I: IntoIterator<Item = FilterResult<ApproachView<'a>>>,
    W: Write,
{
    let mut printed = 0;
    for result in results {
        writeln!(out, "{}", result?)?;
        printed += 1;
    }
    Ok(printed)
}
