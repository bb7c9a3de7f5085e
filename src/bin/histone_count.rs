use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use hmm_histone::progress::spinner;
use hmm_histone::{count_files, find_id_files, get_count_table, Result};

/// Count h2a/h2b/h3/h4/CENH3 ids in every `*_ids.txt` file of a directory.
#[derive(Debug, Parser)]
#[command(name = "histone_count", version, about)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn run(args: &Args) -> Result<String> {
    let gathering = spinner("blue", format!("Gathering *_ids.txt files under '{}'...", args.dir.display()));
    let files = find_id_files(&args.dir);
    gathering.finish_and_clear();
    let files = files?;

    let counting = spinner("green", format!("Counting {} file(s)...", files.len()));
    let rows = count_files(&files);
    counting.finish_and_clear();

    Ok(get_count_table(&rows?))
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Usage: histone_count [dir]");
            process::exit(1);
        }
    };

    match run(&args) {
        Ok(table) => print!("{}", table),
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
