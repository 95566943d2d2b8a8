use std::io::Write;

use clap::Parser;

use fsmloc::cli::{Cli, Commands, OutputFormat, ScanArgs};
use fsmloc::languages::Registry;
use fsmloc::output;
use fsmloc::scanner::Service;
use fsmloc::{EXIT_FAILURE, EXIT_SUCCESS, FsmlocError};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args),
        Commands::Language => run_language(),
        Commands::Version => run_version(),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs) -> i32 {
    match run_scan_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("fsmloc error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_scan_impl(args: &ScanArgs) -> fsmloc::Result<()> {
    let workers = match args.workers {
        Some(0) => return Err(FsmlocError::InvalidWorkerCount),
        Some(count) => count,
        None => 0,
    };

    let service = Service::new(Registry::new(), workers);
    let result = service.scan_path(&args.path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Table => output::write_table(&mut out, &result)?,
        OutputFormat::Json => {
            output::write_json(&mut out, &result)?;

            let export_path = if args.output.as_os_str().is_empty() {
                std::path::PathBuf::from("output.json")
            } else {
                args.output.clone()
            };
            output::export_json_file(&export_path, &result)?;

            writeln!(out, "\nJSON exported to {}", export_path.display())?;
        }
    }

    Ok(())
}

fn run_language() -> i32 {
    let registry = Registry::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match output::write_language_table(&mut out, &registry.languages()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("fsmloc error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_version() -> i32 {
    println!("fsmloc version {}", env!("CARGO_PKG_VERSION"));
    EXIT_SUCCESS
}
