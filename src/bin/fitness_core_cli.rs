use std::process;

use fitness_core::cli::run_cli;
use fitness_core::init;

fn main() {
    init();

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
