use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use hmm_histone::fetch_sequences;

/// Fetch gene sequences from a FASTA file using gene IDs from a tab-separated file.
#[derive(Debug, Parser)]
#[command(name = "fetch_seq", version, about)]
struct Args {
    /// Input tab-separated file containing gene IDs (third column)
    file1: PathBuf,
    /// Input FASTA file containing sequences
    file2: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let fasta = match fetch_sequences(&args.file1, &args.file2) {
        Ok(fasta) => fasta,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(fasta.as_bytes()).and_then(|_| stdout.flush()) {
        // a closed pipe (e.g. `| head`) is not worth a diagnostic
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
