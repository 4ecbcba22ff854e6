//! Generated pool identifiers
//!
//! Named pools are registered under a camelCase conversion of their
//! configuration key, with an additional `DataSource`-suffixed alias when
//! the generated name does not already carry the suffix.

/// Name of the single pool registered when no named pools are configured
pub const DEFAULT_POOL_NAME: &str = "dataSource";

/// Suffix appended to generate the alias of a named pool
pub const ALIAS_SUFFIX: &str = "DataSource";

/// Convert a separated configuration key to a camelCase identifier
///
/// Separators are `-`, `_`, `.` and whitespace. The first character is
/// lowercased, the character following each separator is uppercased, and
/// everything else is preserved.
///
/// # Examples
///
/// ```
/// use seapool::naming::separated_to_camel;
///
/// assert_eq!(separated_to_camel("read-replica"), "readReplica");
/// assert_eq!(separated_to_camel("legacy_data_source"), "legacyDataSource");
/// assert_eq!(separated_to_camel("Primary"), "primary");
/// ```
pub fn separated_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if matches!(ch, '-' | '_' | '.') || ch.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Alias for a generated pool name, if one is warranted
///
/// Returns `{name}DataSource` unless the name already ends with the suffix
/// (compared case-insensitively), in which case no alias is registered.
pub fn alias_for(name: &str) -> Option<String> {
    if ends_with_ignore_ascii_case(name, ALIAS_SUFFIX) {
        None
    } else {
        Some(format!("{name}{ALIAS_SUFFIX}"))
    }
}

fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value
            .as_bytes()
            .iter()
            .rev()
            .zip(suffix.as_bytes().iter().rev())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}
