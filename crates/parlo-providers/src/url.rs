/// Compose a protocol-correct endpoint URL from its pieces.
///
/// `host` is hostname and tld only. Port-qualified loopback hosts get plain
/// HTTP; everything else gets HTTPS unless `force_http` asks otherwise. The
/// query string is appended only when there are params.
pub fn format_url(host: &str, path: &str, params: &[(&str, &str)], force_http: bool) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let protocol = if host.starts_with("localhost:") || force_http {
        "http://"
    } else {
        "https://"
    };

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        format!("{protocol}{host}{path}")
    } else {
        format!("{protocol}{host}{path}?{query}")
    }
}

/// Percent-encode a query or path component.
pub(crate) fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
