mod output;

use crate::filter::select_by_destination;
use crate::logging;
use crate::model::{FlightRecord, add_record};
use crate::report::{ConsoleReporter, Reporter};
use crate::store::{ErrorKind, JsonFileStore, StorageDirectory, StoreError, resolve_store_path};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "reys",
    version,
    long_version = LONG_VERSION,
    about = "Manage a list of flights stored as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Where data files are stored
    #[arg(long, global = true, value_enum, env = "REYS_STORAGE", default_value_t)]
    storage: StorageDirectory,
    #[arg(long, global = true, env = "REYS_LOG_FILE", default_value = "reys.log")]
    log_file: PathBuf,
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new flight
    Add(AddArgs),
    /// Display all flights
    Display(FileArgs),
    /// Select flights by destination
    Select(SelectArgs),
}

#[derive(Args)]
struct FileArgs {
    /// The data file name
    filename: PathBuf,
}

#[derive(Args)]
struct AddArgs {
    #[command(flatten)]
    file: FileArgs,
    /// Destination
    #[arg(short = 'p', long = "pynkt")]
    destination: String,
    /// Flight number
    #[arg(short = 'n', long = "numb", allow_negative_numbers = true)]
    flight_number: i64,
    /// Aircraft type
    #[arg(short = 's', long = "samolet")]
    aircraft_type: Option<String>,
}

#[derive(Args)]
struct SelectArgs {
    #[command(flatten)]
    file: FileArgs,
    /// Destination
    #[arg(short = 'p', long = "pynkt")]
    destination: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(&cli.log_file, cli.verbose) {
        eprintln!("warning: {:#}", err);
    }

    let reporter = ConsoleReporter;
    if let Err(err) = dispatch(cli.command, cli.storage, &reporter) {
        reporter.error(&failure_message(&err));
    }
    Ok(())
}

fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<StoreError>().map(StoreError::kind) {
        Some(ErrorKind::Validation) => format!("Invalid data file: {:#}", err),
        _ => format!("An error occurred: {:#}", err),
    }
}

fn dispatch(command: Commands, storage: StorageDirectory, reporter: &dyn Reporter) -> Result<()> {
    match command {
        Commands::Add(args) => {
            let store = open_store(&args.file, storage)?;
            add_flight(&store, args, reporter);
        }
        Commands::Display(args) => {
            let store = open_store(&args, storage)?;
            let flights = store.load_or_report(reporter);
            output::print_flights(&flights, reporter);
        }
        Commands::Select(args) => {
            let store = open_store(&args.file, storage)?;
            let flights = store.load_or_report(reporter);
            let selected = select_by_destination(&flights, &args.destination, reporter);
            output::print_flights(&selected, reporter);
        }
    }
    Ok(())
}

fn open_store(args: &FileArgs, storage: StorageDirectory) -> Result<JsonFileStore> {
    let path = resolve_store_path(&args.filename, storage)?;
    log::debug!("using data file {}", path.display());
    Ok(JsonFileStore::new(path))
}

fn add_flight(store: &JsonFileStore, args: AddArgs, reporter: &dyn Reporter) {
    let mut flights = store.load_or_report(reporter);
    add_record(
        &mut flights,
        FlightRecord::new(args.destination, args.flight_number, args.aircraft_type),
    );
    match store.save(&flights) {
        Ok(()) => reporter.info(&format!(
            "Saved {} flights to {}",
            flights.len(),
            store.path().display()
        )),
        Err(err) => reporter.error(&format!("Failed to save flights: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_short_flags() {
        let cli = Cli::try_parse_from([
            "reys", "add", "flights.json", "-p", "Moscow", "-n", "101", "-s", "Boeing",
        ])
        .unwrap();
        assert_eq!(cli.storage, StorageDirectory::Home);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.file.filename, PathBuf::from("flights.json"));
                assert_eq!(args.destination, "Moscow");
                assert_eq!(args.flight_number, 101);
                assert_eq!(args.aircraft_type.as_deref(), Some("Boeing"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn add_requires_destination_and_number() {
        assert!(Cli::try_parse_from(["reys", "add", "flights.json", "-n", "1"]).is_err());
        assert!(Cli::try_parse_from(["reys", "add", "flights.json", "-p", "Omsk"]).is_err());
        assert!(
            Cli::try_parse_from(["reys", "add", "flights.json", "-p", "Omsk", "-n", "x"])
                .is_err()
        );
    }

    #[test]
    fn parses_storage_policy() {
        let cli = Cli::try_parse_from(["reys", "display", "f.json", "--storage", "as-given"])
            .unwrap();
        assert_eq!(cli.storage, StorageDirectory::AsGiven);
    }

    #[test]
    fn validation_failures_are_labelled() {
        let err = anyhow::Error::new(StoreError::HomeDirectoryUnavailable);
        assert_eq!(
            failure_message(&err),
            "Invalid data file: unable to resolve home directory"
        );
        let other = anyhow::anyhow!("boom");
        assert_eq!(failure_message(&other), "An error occurred: boom");
    }

    #[test]
    fn select_requires_destination() {
        assert!(Cli::try_parse_from(["reys", "select", "flights.json"]).is_err());
    }
}
