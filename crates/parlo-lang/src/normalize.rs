/// Structural normalization of an ISO language code.
///
/// Separators are unified to hyphens and the whole code lowercased. When the
/// code splits into exactly two parts, the second part is fixed up by length:
/// four characters is an ISO 15924 script subtag (capitalized), two characters
/// is an ISO 3166-1 region subtag (uppercased), anything else is left alone.
///
/// Malformed input passes through after best-effort splitting; this never
/// fails.
pub fn normalize_structure(code: &str) -> String {
    let code = code.replace('_', "-").to_lowercase();
    let parts: Vec<&str> = code.split('-').collect();

    if parts.len() == 2 {
        let tail = match parts[1].len() {
            4 => capitalize(parts[1]),
            2 => parts[1].to_uppercase(),
            _ => parts[1].to_string(),
        };
        return format!("{}-{}", parts[0], tail);
    }

    code
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
