use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use hmm_histone::progress::spinner;
use hmm_histone::split_best_hits_file;

/// Keep the lowest e-value hit per gene and write the remaining hits separately.
#[derive(Debug, Parser)]
#[command(name = "best_hit_splitter", version, about)]
struct Args {
    /// Whitespace-delimited hit table (hmmscan --tblout); `#` lines are skipped
    input_file: PathBuf,
    /// Output TSV with one best hit per gene
    best_output_file: PathBuf,
    /// Output TSV with every other hit
    worst_output_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Usage: best_hit_splitter <input_file> <best_output_file> <worst_output_file>");
            process::exit(1);
        }
    };

    let spinner = spinner("green", "Splitting best hits...");
    let result = split_best_hits_file(&args.input_file, &args.best_output_file, &args.worst_output_file);
    spinner.finish_and_clear();

    match result {
        Ok(split) => {
            log::info!("{} best, {} removed", split.best.len(), split.worst.len());
            println!("Best e-value data saved to: {}", args.best_output_file.display());
            println!("Removed data saved to: {}", args.worst_output_file.display());
        }
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
