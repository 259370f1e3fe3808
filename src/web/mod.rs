//! JSON web front end with a clickable board page.
//!
//! Routes:
//! - `POST /api/initBoard` with `{ "fen": "..." }`
//! - `POST /api/makeMove` with `{ "move": "e2e4" }`
//! - `GET /` and the page assets
//!
//! Successful API calls answer `{ "board", "fen", "turn" }`; failures
//! answer `{ "error": "..." }` with a 4xx status.

mod assets;
mod config;
mod routes;
mod server;

pub use config::ServerConfig;
pub use routes::{handle, ApiResponse};
pub use server::serve;
