use chrono::Local;
use clap::Parser;
use ripen::application::advance::{advance_documents, AdvanceOptions};
use ripen::cli::{format_advance_report, Cli};
use ripen::error::RipenError;
use ripen::infrastructure::DocumentRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RipenError> {
    let repository = DocumentRepository::open(&cli.root)?;

    let options = AdvanceOptions {
        now: Local::now().naive_local(),
        dry_run: cli.dry_run,
    };

    let report = advance_documents(&repository, &options)?;

    for skipped in &report.skipped {
        eprintln!("Skipped {}: {}", skipped.filename, skipped.reason);
    }

    print!("{}", format_advance_report(&report));

    Ok(())
}
