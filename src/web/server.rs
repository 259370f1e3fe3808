use std::io::{self, Read};

use log::{info, warn};
use tiny_http::{Header, Response, Server, StatusCode};

use super::{handle, ServerConfig};
use crate::session::SharedSession;

/// Serve requests one at a time until the listener shuts down.
pub fn serve(config: &ServerConfig, session: SharedSession) -> io::Result<()> {
    let server = Server::http(config.addr.as_str()).map_err(io::Error::other)?;
    info!("Server running on http://{}", config.addr);

    for mut request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let mut body = String::new();
        if let Err(e) = request.as_reader().read_to_string(&mut body) {
            warn!("{method} {url}: unreadable body: {e}");
            let reply = Response::from_string(r#"{"error":"Bad request"}"#)
                .with_status_code(StatusCode(400));
            if let Err(e) = request.respond(reply) {
                warn!("{method} {url}: failed to respond: {e}");
            }
            continue;
        }

        let response = handle(&session, &method, &url, &body);
        info!("{method} {url} -> {}", response.status);

        let mut reply =
            Response::from_string(response.body).with_status_code(StatusCode(response.status));
        match Header::from_bytes(&b"Content-Type"[..], response.content_type.as_bytes()) {
            Ok(header) => reply = reply.with_header(header),
            Err(()) => warn!("invalid content type {:?}", response.content_type),
        }
        if let Err(e) = request.respond(reply) {
            warn!("{method} {url}: failed to respond: {e}");
        }
    }

    Ok(())
}
