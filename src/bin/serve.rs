use std::process::ExitCode;

use env_logger::Env;
use fen_board::web::{serve, ServerConfig};
use fen_board::GameSession;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::resolve(std::env::args().skip(1));
    if let Err(e) = serve(&config, GameSession::shared()) {
        log::error!("server on {} stopped: {e}", config.addr);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
