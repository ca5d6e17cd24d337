use nucheck::cli::CliCommand;
use nucheck::logging;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unwritable so the CLI still runs.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("nucheck error: {:#}", err);
        std::process::exit(1);
    }
}
