//! Board page files, embedded at compile time.

const INDEX_HTML: &str = include_str!("../../public/index.html");
const SCRIPT_JS: &str = include_str!("../../public/script.js");
const STYLE_CSS: &str = include_str!("../../public/style.css");

/// Content type and body for a static path, if one exists.
pub(crate) fn lookup(path: &str) -> Option<(&'static str, &'static str)> {
    match path {
        "/" | "/index.html" => Some(("text/html; charset=utf-8", INDEX_HTML)),
        "/script.js" => Some(("application/javascript; charset=utf-8", SCRIPT_JS)),
        "/style.css" => Some(("text/css; charset=utf-8", STYLE_CSS)),
        _ => None,
    }
}
