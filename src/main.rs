mod account;
mod ledger;
mod ops;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "In-memory ATM simulation over a fixed-capacity ledger.")]
struct Args {
    /// CSV operation script to run instead of the built-in demo sequence.
    #[clap(long)]
    script: Option<PathBuf>,

    /// Per-run report file, truncated at start.
    #[clap(long, default_value = "atm_output.txt")]
    output: PathBuf,

    /// Persistent account dump, appended to on exit.
    #[clap(long, default_value = "accounts.txt")]
    save: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut report = match File::create(&args.output) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error opening output file {}: {}", args.output.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&args, &mut report) {
        eprintln!("Error writing to {}: {}", args.output.display(), err);
        return ExitCode::FAILURE;
    }

    println!(
        "ATM operations completed. Check {} and {} for results.",
        args.output.display(),
        args.save.display()
    );
    ExitCode::SUCCESS
}

fn run(args: &Args, report: &mut File) -> std::io::Result<()> {
    writeln!(report, "Data Type Sizes (in bytes):")?;
    writeln!(report, "u32: {}", std::mem::size_of::<u32>())?;
    writeln!(report, "f64: {}", std::mem::size_of::<f64>())?;
    writeln!(report, "String: {}", std::mem::size_of::<String>())?;
    writeln!(
        report,
        "Account: {}",
        std::mem::size_of::<crate::account::Account>()
    )?;

    let mut ledger = crate::ledger::Ledger::new(100);

    match &args.script {
        Some(script) => {
            let file = File::open(script).expect("Failed to read operation script.");
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All) // scripts may contain space padding
                .from_reader(file);

            for op in rdr.deserialize::<crate::ops::Op>() {
                op.expect("Failed to parse operation.")
                    .apply_to(&mut ledger, report)?;
            }
        }
        None => run_demo(&mut ledger, report)?,
    }

    if let Err(err) = ledger.save_all(&args.save) {
        eprintln!("Error opening {} for writing: {}", args.save.display(), err);
    }

    Ok(())
}

/// The fixed sample sequence run when no script is given.
fn run_demo(ledger: &mut crate::ledger::Ledger, report: &mut File) -> std::io::Result<()> {
    ledger.add_account("John Doe", 1001, 500.0);
    ledger.add_account("Jane Smith", 1002, 1000.0);
    ledger.add_account("Alice Johnson", 1003, 250.0);

    ledger.deposit(1001, 200.0, report)?;
    ledger.withdraw(1002, 300.0, report)?;
    ledger.deposit(1003, 50.0, report)?;
    ledger.withdraw(1001, 100.0, report)?;

    ledger.display_account(1001, report)?;
    ledger.display_account(1002, report)?;
    ledger.display_account(1004, report) // non-existent account
}
