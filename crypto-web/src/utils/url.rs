//! URL and cookie string helpers

/// Find a cookie in a `document.cookie` style string and URL-decode its value.
///
/// Pairs are `; ` separated; only the first `=` splits name from value.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| decode(value))
        })
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

/// Turn a raw location hash (`"#/convert"`, `"#"`, `""`) into a route path.
pub fn normalize_fragment(hash: &str) -> &str {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Percent-encode a single path segment such as an asset symbol.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
