//! Request routing, independent of the HTTP server.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assets;
use crate::session::{SessionError, SharedSession, Snapshot};

const JSON: &str = "application/json";

/// Status, content type and body of a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => ApiResponse {
                status,
                content_type: JSON,
                body,
            },
            Err(e) => {
                warn!("failed to encode response: {e}");
                ApiResponse {
                    status: 500,
                    content_type: JSON,
                    body: r#"{"error":"Internal error"}"#.to_string(),
                }
            }
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, &json!({ "error": message }))
    }

    fn snapshot(snapshot: &Snapshot) -> Self {
        Self::json(200, snapshot)
    }
}

#[derive(Deserialize)]
struct InitBoardRequest {
    fen: String,
}

#[derive(Deserialize)]
struct MakeMoveRequest {
    #[serde(rename = "move")]
    mv: String,
}

/// Route one request against the shared session.
#[must_use]
pub fn handle(session: &SharedSession, method: &str, url: &str, body: &str) -> ApiResponse {
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        ("POST", "/api/initBoard") => init_board(session, body),
        ("POST", "/api/makeMove") => make_move(session, body),
        ("GET", _) => match assets::lookup(path) {
            Some((content_type, content)) => ApiResponse {
                status: 200,
                content_type,
                body: content.to_string(),
            },
            None => ApiResponse::error(404, "Not found"),
        },
        _ => ApiResponse::error(404, "Not found"),
    }
}

fn init_board(session: &SharedSession, body: &str) -> ApiResponse {
    let fen = match serde_json::from_str::<InitBoardRequest>(body) {
        Ok(request) => request.fen,
        Err(e) => {
            warn!("initBoard: bad request body: {e}");
            return ApiResponse::error(400, "Invalid FEN");
        }
    };

    let mut session = session.lock();
    match session.load_fen(&fen) {
        Ok(position) => ApiResponse::snapshot(&Snapshot::of(position)),
        Err(e) => {
            warn!("initBoard: {fen:?} rejected: {e:?}");
            ApiResponse::error(400, &e.to_string())
        }
    }
}

fn make_move(session: &SharedSession, body: &str) -> ApiResponse {
    let mut session = session.lock();
    if !session.is_active() {
        return ApiResponse::error(400, &SessionError::NoGameInProgress.to_string());
    }

    let text = match serde_json::from_str::<MakeMoveRequest>(body) {
        Ok(request) => request.mv,
        Err(e) => {
            warn!("makeMove: bad request body: {e}");
            return ApiResponse::error(400, "Invalid move");
        }
    };

    let result = session.make_move(&text).and_then(|_| session.snapshot());
    match result {
        Ok(snapshot) => ApiResponse::snapshot(&snapshot),
        Err(e) => {
            warn!("makeMove: {text:?} rejected: {e:?}");
            ApiResponse::error(400, &e.to_string())
        }
    }
}
