//! Location string helpers: split `path?query#hash`, parse and render query
//! strings.
//!
//! Query values are percent-encoded with the same unreserved set as
//! `encodeURIComponent`, except that `/` is left as-is so redirect targets
//! stay readable (`?redirect=/usuarios/admin`).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Bytes escaped in query keys and values: everything `encodeURIComponent`
/// escapes, minus `/`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'/');

/// Query string as ordered key/value pairs.
pub type QueryPairs = Vec<(String, String)>;

/// A location split into its parts. `query` and `hash` exclude their
/// leading `?` / `#`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationParts<'a> {
    pub path: &'a str,
    pub query: &'a str,
    pub hash: &'a str,
}

/// Split a full location (`/a/b?x=1#top`) into path, query and hash.
pub fn split_location(full: &str) -> LocationParts<'_> {
    let (rest, hash) = full.split_once('#').unwrap_or((full, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let path = if path.is_empty() { "/" } else { path };
    LocationParts { path, query, hash }
}

/// Join router-provided pieces back into a full path. `search` and `hash`
/// may or may not carry their leading `?` / `#`.
pub fn join_location(path: &str, search: &str, hash: &str) -> String {
    let search = search.trim_start_matches('?');
    let hash = hash.trim_start_matches('#');
    let mut out = if path.is_empty() { "/".to_owned() } else { path.to_owned() };
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Parse `a=1&b=two%20words` into decoded pairs. Keys without `=` get an
/// empty value; empty pieces are skipped.
pub fn parse_query(query: &str) -> QueryPairs {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Render `path` with an encoded query string, omitting `?` when empty.
pub fn build_href(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_owned();
    }
    let rendered: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect();
    format!("{path}?{}", rendered.join("&"))
}

/// Percent-encode one query key or value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT).to_string()
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through.
pub fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " ")).decode_utf8_lossy().into_owned()
}
