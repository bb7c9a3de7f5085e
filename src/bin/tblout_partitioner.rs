use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use hmm_histone::partition_tblout;
use hmm_histone::progress::spinner;

/// Split an HMMER tblout report into `{organism}_histone_ids.txt` files by protein id prefix.
#[derive(Debug, Parser)]
#[command(name = "tblout_partitioner", version, about)]
struct Args {
    /// HMMER --tblout report
    tblout_file: PathBuf,
    /// Two-column TSV: id prefix, organism name
    prefix_file: PathBuf,
    /// Where the per-organism files are written
    #[arg(long, default_value = ".")]
    outdir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Usage: tblout_partitioner <tblout_file> <prefix_file> [--outdir DIR]");
            process::exit(1);
        }
    };

    let spinner = spinner("yellow", "Separating proteins by organism...");
    let result = partition_tblout(&args.tblout_file, &args.prefix_file, &args.outdir);
    spinner.finish_and_clear();

    match result {
        Ok(written) => {
            for path in &written {
                log::info!("wrote {}", path.display());
            }
            println!("Proteins successfully separated into files with query name and e-value added.");
        }
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
