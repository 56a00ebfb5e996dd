use std::io;
use std::process::ExitCode;

use sosu_table::config::Config;
use sosu_table::prompt::run;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut stdin.lock(), &mut stdout.lock(), &Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
