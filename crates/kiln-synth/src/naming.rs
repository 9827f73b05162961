//! Naming rules for synthesized members.

pub const GETTER_PREFIX: &str = "get";
pub const SETTER_PREFIX: &str = "set";
/// Prefix of the setter parameter, keeping it distinct from the field it assigns.
pub const SETTER_PARAM_PREFIX: &str = "_";

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn getter_name(field: &str) -> String {
    format!("{GETTER_PREFIX}{}", capitalize(field))
}

pub fn setter_name(field: &str) -> String {
    format!("{SETTER_PREFIX}{}", capitalize(field))
}

pub fn setter_param_name(field: &str) -> String {
    format!("{SETTER_PARAM_PREFIX}{field}")
}
