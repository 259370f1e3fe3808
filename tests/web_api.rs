#![cfg(feature = "web")]

use fen_board::web::{handle, ApiResponse};
use fen_board::{GameSession, SharedSession};
use serde_json::{json, Value};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn post(session: &SharedSession, path: &str, body: Value) -> (u16, Value) {
    let ApiResponse {
        status,
        content_type,
        body,
    } = handle(session, "POST", path, &body.to_string());
    assert_eq!(content_type, "application/json");
    (status, serde_json::from_str(&body).expect("response is JSON"))
}

#[test]
fn init_board_returns_snapshot() {
    let session = GameSession::shared();
    let (status, reply) = post(&session, "/api/initBoard", json!({ "fen": START }));

    assert_eq!(status, 200);
    assert_eq!(reply["fen"], START);
    assert_eq!(reply["turn"], "white");
    assert_eq!(reply["board"][0][0], "r");
    assert_eq!(reply["board"][7][4], "K");
    assert_eq!(reply["board"][4][4], Value::Null);
    assert_eq!(reply["board"].as_array().map(Vec::len), Some(8));
}

#[test]
fn init_board_rejects_bad_fen() {
    let session = GameSession::shared();
    let (status, reply) = post(&session, "/api/initBoard", json!({ "fen": "8/8/8 w - - 0 1" }));
    assert_eq!(status, 400);
    assert_eq!(reply, json!({ "error": "Invalid FEN" }));

    let response = handle(&session, "POST", "/api/initBoard", "not json");
    assert_eq!(response.status, 400);
    assert!(!session.lock().is_active());
}

#[test]
fn make_move_without_game() {
    let session = GameSession::shared();
    let (status, reply) = post(&session, "/api/makeMove", json!({ "move": "e2e4" }));
    assert_eq!(status, 400);
    assert_eq!(reply, json!({ "error": "No game in progress" }));
}

#[test]
fn make_move_updates_position() {
    let session = GameSession::shared();
    post(&session, "/api/initBoard", json!({ "fen": START }));

    let (status, reply) = post(&session, "/api/makeMove", json!({ "move": "e2e4" }));
    assert_eq!(status, 200);
    assert_eq!(
        reply["fen"],
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
    assert_eq!(reply["turn"], "black");
    assert_eq!(reply["board"][4][4], "P");
    assert_eq!(reply["board"][6][4], Value::Null);

    let (status, reply) = post(&session, "/api/makeMove", json!({ "move": "c7c5" }));
    assert_eq!(status, 200);
    assert_eq!(reply["turn"], "white");
    assert!(reply["fen"].as_str().unwrap().ends_with("w KQkq c6 0 2"));
}

#[test]
fn invalid_move_leaves_position() {
    let session = GameSession::shared();
    post(&session, "/api/initBoard", json!({ "fen": START }));

    for bad in ["e2", "e2e9", "e4e5", "e2e2"] {
        let (status, reply) = post(&session, "/api/makeMove", json!({ "move": bad }));
        assert_eq!(status, 400, "move {bad}");
        assert_eq!(reply, json!({ "error": "Invalid move" }));
    }

    let response = handle(&session, "POST", "/api/makeMove", r#"{"mv":"e2e4"}"#);
    assert_eq!(response.status, 400);
    assert_eq!(session.lock().snapshot().unwrap().fen, START);
}

#[test]
fn reinit_replaces_game() {
    let session = GameSession::shared();
    post(&session, "/api/initBoard", json!({ "fen": START }));
    post(&session, "/api/makeMove", json!({ "move": "g1f3" }));

    let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
    let (_, reply) = post(&session, "/api/initBoard", json!({ "fen": fen }));
    assert_eq!(reply["fen"], fen);

    let (_, reply) = post(&session, "/api/makeMove", json!({ "move": "e1g1" }));
    assert_eq!(reply["fen"], "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
}

#[test]
fn serves_board_page() {
    let session = GameSession::shared();
    let page = handle(&session, "GET", "/", "");
    assert_eq!(page.status, 200);
    assert!(page.body.contains("<div id=\"board\""));

    let script = handle(&session, "GET", "/script.js", "");
    assert!(script.content_type.starts_with("application/javascript"));
    assert!(script.body.contains("/api/makeMove"));

    let style = handle(&session, "GET", "/style.css", "");
    assert!(style.content_type.starts_with("text/css"));
}
