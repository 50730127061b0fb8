//! Header map helpers.

use std::collections::HashMap;

/// Combine `base` with a flat `[key, value, key, value, ...]` list into a new map.
///
/// Pairs are applied in order after `base`, so later entries win. An odd
/// trailing element has no value and is dropped without error. `base` is
/// left untouched.
///
/// ```
/// use std::collections::HashMap;
/// use master_sdk_core::merge_headers;
///
/// let base = HashMap::from([("Accept".to_string(), "*/*".to_string())]);
/// let merged = merge_headers(&base, &["Accept", "application/json", "X-Token"]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged["Accept"], "application/json");
/// ```
#[must_use]
pub fn merge_headers<S: AsRef<str>>(
    base: &HashMap<String, String>,
    added: &[S],
) -> HashMap<String, String> {
    let mut merged = HashMap::with_capacity(base.len() + added.len() / 2);
    merged.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
    apply_flat_pairs(&mut merged, added);
    merged
}

pub(crate) fn apply_flat_pairs<S: AsRef<str>>(headers: &mut HashMap<String, String>, added: &[S]) {
    for pair in added.chunks_exact(2) {
        if let [key, value] = pair {
            headers.insert(key.as_ref().to_string(), value.as_ref().to_string());
        }
    }
}
