//! The default route table.
//!
//! | method | path | response                                   |
//! |--------|------|--------------------------------------------|
//! | `GET`  | `/`  | `200`, `application/json`, `{"hello":"world"}` |
//! | other  |      | `404`, `text/html`, names method and path  |

use http::StatusCode;
use serde_json::json;
use wisp_http::protocol::{Request, Response};

use crate::router::{Router, get};

/// Builds the router served by the `wisp` binary.
pub fn default_router() -> Router {
    Router::builder().route("/", get(hello_world)).default_handler(not_found).build()
}

pub fn hello_world(_request: &Request) -> Response {
    Response::json(StatusCode::OK, json!({ "hello": "world" }))
}

/// Answers `404` with a page naming the unmatched method and path.
pub fn not_found(request: &Request) -> Response {
    let method = escape_html(request.method().unwrap_or_default());
    let path = escape_html(request.path().unwrap_or_default());
    Response::html(StatusCode::NOT_FOUND, format!("<h1>404 Not Found</h1><p>Cannot {method} {path}</p>"))
}

fn escape_html(str: &str) -> String {
    let mut escaped = String::with_capacity(str.len());
    for c in str.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
