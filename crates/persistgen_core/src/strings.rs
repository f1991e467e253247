//! Case helpers shared by the naming policy and the Rust renderer.
//!
//! These operate on Unicode scalar values, never on bytes, so a multi-byte leading character is
//! uppercased as a whole.

/// Uppercase every character of `s`.
pub fn uppercase_all(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

/// Uppercase the first character of `s` and keep the remainder unchanged.
///
/// ## Examples
/// ```rust
/// use persistgen_core::strings::uppercase_first;
///
/// assert_eq!(uppercase_first("idRegistration"), "IdRegistration");
/// assert_eq!(uppercase_first(""), "");
/// ```
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a property name to a snake_case Rust member name.
///
/// Word boundaries are placed before an uppercase letter that follows a lowercase letter or digit,
/// and before the last uppercase letter of an acronym run that is followed by a lowercase letter
/// (`HTTPServer` -> `http_server`). Existing underscores are kept but never doubled.
///
/// ## Examples
/// ```rust
/// use persistgen_core::strings::to_snake_case;
///
/// assert_eq!(to_snake_case("IdRegistration"), "id_registration");
/// assert_eq!(to_snake_case("User_id_external"), "user_id_external");
/// assert_eq!(to_snake_case("X"), "x");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary =
                prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.extend(c.to_lowercase());
    }

    out
}
