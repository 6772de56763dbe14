//! Header block decoder.
//!
//! Turns the text before the first blank line of a request into a
//! [`RequestHeader`]. Parsing is best-effort: a short request line leaves
//! the missing tokens as `None`, and malformed header lines are kept as
//! well as they can be, so this step never fails.
//!
//! # Rules
//!
//! - The request line is split on single spaces into method, path and
//!   version. Extra tokens are ignored, empty tokens are `None`.
//! - Each header line is split on its first `:`. The name keeps its case and
//!   surrounding bytes, the value is trimmed and keeps any further colons.
//!   A line without a colon is a name with an empty value.
//! - Later header lines overwrite earlier ones with the same name.

use std::collections::HashMap;

use tracing::trace;

use crate::protocol::RequestHeader;

const LINE_SEPARATOR: &str = "\r\n";

/// Decoder for the request line and header fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl HeaderDecoder {
    /// Decodes a header block (the text before the first `\r\n\r\n`).
    pub fn decode(&self, header_block: &str) -> RequestHeader {
        let mut lines = header_block.split(LINE_SEPARATOR);

        let request_line = lines.next().unwrap_or_default();
        let mut tokens = request_line.split(' ').map(|token| (!token.is_empty()).then(|| token.to_owned()));
        let method = tokens.next().flatten();
        let path = tokens.next().flatten();
        let version = tokens.next().flatten();

        let mut headers = HashMap::new();
        for line in lines.filter(|line| !line.is_empty()) {
            let (name, value) = line.split_once(':').unwrap_or((line, ""));
            headers.insert(name.to_owned(), value.trim().to_owned());
        }

        trace!(method = ?method, path = ?path, header_count = headers.len(), "decoded request header");

        RequestHeader::new(method, path, version, headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    // indoc strips indentation and uses `\n`, requests on the wire use `\r\n`
    fn crlf(str: &str) -> String {
        str.replace('\n', "\r\n")
    }

    #[test]
    fn from_curl() {
        let str = crlf(indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*"##});

        let header = HeaderDecoder.decode(&str);

        assert_eq!(header.method(), Some("GET"));
        assert_eq!(header.version(), Some("HTTP/1.1"));
        assert_eq!(header.path(), Some("/index.html"));
        assert!(header.query().is_empty());

        assert_eq!(header.headers().len(), 3);
        assert_eq!(header.header("Host"), Some("127.0.0.1:8080"));
        assert_eq!(header.header("User-Agent"), Some("curl/7.79.1"));
        assert_eq!(header.header("Accept"), Some("*/*"));
    }

    #[test]
    fn from_edge() {
        let str = crlf(indoc! {r##"
        GET /index/?a=1&b=2&a=3 HTTP/1.1
        Host: 127.0.0.1:8080
        Connection: keep-alive
        Cache-Control: max-age=0
        sec-ch-ua: "#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109"
        sec-ch-ua-mobile: ?0
        sec-ch-ua-platform: "macOS"
        Upgrade-Insecure-Requests: 1
        Accept-Encoding: gzip, deflate, br
        Accept-Language: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"##});

        let header = HeaderDecoder.decode(&str);

        assert_eq!(header.method(), Some("GET"));
        assert_eq!(header.path(), Some("/index/?a=1&b=2&a=3"));
        assert_eq!(header.route_path(), Some("/index/"));
        assert_eq!(header.query().len(), 2);
        assert_eq!(header.query().value("a"), Some("3"));
        assert_eq!(header.query().value("b"), Some("2"));

        assert_eq!(header.headers().len(), 9);
        assert_eq!(header.header("Connection"), Some("keep-alive"));
        assert_eq!(header.header("Cache-Control"), Some("max-age=0"));
        assert_eq!(header.header("sec-ch-ua"), Some(r##""#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109""##));
        assert_eq!(header.header("sec-ch-ua-mobile"), Some("?0"));
        assert_eq!(header.header("sec-ch-ua-platform"), Some("\"macOS\""));
        assert_eq!(header.header("Accept-Language"), Some("zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"));
    }

    #[test]
    fn header_names_keep_case() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1\r\ncontent-type: text/plain");
        assert_eq!(header.header("content-type"), Some("text/plain"));
        assert_eq!(header.header("Content-Type"), None);
    }

    #[test]
    fn duplicate_header_last_wins() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1\r\nX: 1\r\nX: 2");
        assert_eq!(header.headers().len(), 1);
        assert_eq!(header.header("X"), Some("2"));
    }

    #[test]
    fn header_value_keeps_later_colons() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1\r\nHost:   127.0.0.1:8080  \r\nX-Time: 12:30:45");
        assert_eq!(header.header("Host"), Some("127.0.0.1:8080"));
        assert_eq!(header.header("X-Time"), Some("12:30:45"));
    }

    #[test]
    fn header_line_without_colon() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1\r\nbroken-line");
        assert_eq!(header.header("broken-line"), Some(""));
    }

    #[test]
    fn short_request_line() {
        let header = HeaderDecoder.decode("GET");
        assert_eq!(header.method(), Some("GET"));
        assert_eq!(header.path(), None);
        assert_eq!(header.version(), None);
        assert!(header.headers().is_empty());
    }

    #[test]
    fn empty_header_block() {
        let header = HeaderDecoder.decode("");
        assert_eq!(header.method(), None);
        assert_eq!(header.path(), None);
        assert!(header.headers().is_empty());
    }

    #[test]
    fn extra_request_line_tokens_are_ignored() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1 trailing");
        assert_eq!(header.method(), Some("GET"));
        assert_eq!(header.path(), Some("/"));
        assert_eq!(header.version(), Some("HTTP/1.1"));
    }

    #[test]
    fn method_is_not_validated() {
        let header = HeaderDecoder.decode("BREW /pot HTCPCP/1.0");
        assert_eq!(header.method(), Some("BREW"));
        assert_eq!(header.version(), Some("HTCPCP/1.0"));
    }

    #[test]
    fn trailing_line_break_without_blank_line() {
        let header = HeaderDecoder.decode("GET / HTTP/1.1\r\nHost: a\r\n");
        assert_eq!(header.headers().len(), 1);
        assert_eq!(header.header("Host"), Some("a"));
    }
}
