//! Parsers for the `key->value,key->value` role mapping syntax used by SSO settings

use std::collections::BTreeMap;

fn arrow_pairs(input: &str) -> impl Iterator<Item = (&str, &str)> {
    input
        .split(',')
        .filter_map(|entry| entry.split_once("->"))
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Parse into a map with one value per key; later entries win
pub fn parse_single_valued(input: &str) -> BTreeMap<String, String> {
    arrow_pairs(input)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Parse into a map collecting every value given for a key, in order
pub fn parse_multi_valued(input: &str) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in arrow_pairs(input) {
        map.entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    map
}
