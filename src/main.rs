use std::io;
use std::process::ExitCode;

use env_logger::{Env, Target};
use fen_board::console::run_console;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_console(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("console I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
