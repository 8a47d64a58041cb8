use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref VAR_REF: Regex =
        Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)(?::?-([^}]*))?\}").unwrap();
}

///replaces every ${VAR} with its value from `vars` (empty when unset)
///and every ${VAR:-default} / ${VAR-default} with the value, or `default` when unset or empty
pub fn substitute(data: &str, vars: &HashMap<String, String>) -> String {
    VAR_REF
        .replace_all(data, |cap: &Captures| {
            let value = vars.get(&cap[1]).map(String::as_str).unwrap_or_default();
            match cap.get(2) {
                Some(default) if value.is_empty() => default.as_str().to_string(),
                _ => value.to_string(),
            }
        })
        .into_owned()
}
