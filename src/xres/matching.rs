//! Component-wise wildcard matching of resource identifiers
//!
//! A resource identifier is a dot-separated component path in which `*`
//! stands for a variable-length gap and `?` for exactly one component.
//! Matching is symmetric: either argument may carry wildcards, and
//! `match_resource(a, b) == match_resource(b, a)`.
//!
//! The algorithm compares component sequences after padding: each sequence
//! containing a `*` has that `*` replaced by enough `?` components to reach
//! the longer sequence's length, then the two are compared position by
//! position.

use crate::xres::error::MatchError;

const WILDCARDS: [char; 2] = ['*', '?'];

/// Whether `resource_id` and `pattern` match component-wise.
///
/// Fails with [`MatchError::WildcardAttribute`] if either input ends in a
/// wildcard: a wildcard cannot stand in for the attribute name.
pub fn match_resource(resource_id: &str, pattern: &str) -> Result<bool, MatchError> {
    let resource_components = components(resource_id)?;
    let pattern_components = components(pattern)?;
    let pad_len = resource_components.len().max(pattern_components.len());

    let expanded_resource = pad_components(resource_components, pad_len);
    let expanded_pattern = pad_components(pattern_components, pad_len);

    // A sequence without '*' may still be shorter than the pad length; a
    // position present on one side only is a mismatch.
    if expanded_resource.len() != expanded_pattern.len() {
        return Ok(false);
    }
    Ok(expanded_resource
        .iter()
        .zip(&expanded_pattern)
        .all(|(a, b)| compare_component(a, b)))
}

/// Split an identifier into components on `.`, with `*` and `?` split out
/// as their own components and empty components dropped.
fn components(id: &str) -> Result<Vec<String>, MatchError> {
    let mut result: Vec<String> = Vec::new();
    let mut comp = String::new();
    for ch in id.chars() {
        if ch == '.' {
            result.push(std::mem::take(&mut comp));
        } else if WILDCARDS.contains(&ch) {
            result.push(std::mem::take(&mut comp));
            result.push(ch.to_string());
        } else {
            comp.push(ch);
        }
    }
    result.push(comp);
    result.retain(|c| !c.is_empty());

    match result.last() {
        Some(last) if last != "*" && last != "?" => Ok(result),
        // Ends in a wildcard, or has no components at all.
        _ => Err(MatchError::WildcardAttribute { id: id.to_string() }),
    }
}

/// Replace the first `*` (if any) with enough `?` components for the
/// sequence to reach `length`; sequences without `*` are left as-is.
fn pad_components(components: Vec<String>, length: usize) -> Vec<String> {
    let mut expanded = components;
    if let Some(star) = expanded.iter().position(|c| c == "*") {
        expanded.remove(star);
        while expanded.len() < length {
            expanded.insert(star, "?".to_string());
        }
    }
    expanded
}

fn compare_component(a: &str, b: &str) -> bool {
    a == "?" || b == "?" || a == b
}
