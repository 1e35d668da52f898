//! pure set algebra over keyed scope maps.
//!
//! both resource scopes (application name to patterns) and subject
//! scopes (subject kind to canonical ids) are maps from a key to a set,
//! and privilege updates combine them the same way: [`merge`] unions,
//! [`remove`] subtracts and prunes keys whose sets drain empty. Both
//! return fresh maps and leave their inputs untouched.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// union two scope maps.
///
/// the result's key set is the union of both key sets; each key maps to
/// the union of the corresponding sets, with a missing side treated as
/// empty. `merge(m, {})` is `m` for any map, and merge is commutative
/// and associative.
pub fn merge<K, V>(
    a: &HashMap<K, HashSet<V>>,
    b: &HashMap<K, HashSet<V>>,
) -> HashMap<K, HashSet<V>>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    let mut merged = a.clone();
    for (key, set) in b {
        merged
            .entry(key.clone())
            .or_default()
            .extend(set.iter().cloned());
    }
    merged
}

/// subtract scope map `b` from `a`.
///
/// for each key in `b`, the corresponding set is subtracted from `a`'s
/// entry; a key whose set drains empty is dropped entirely rather than
/// kept with an empty set. Keys only in `b` are no-ops, keys only in
/// `a` are untouched.
pub fn remove<K, V>(
    a: &HashMap<K, HashSet<V>>,
    b: &HashMap<K, HashSet<V>>,
) -> HashMap<K, HashSet<V>>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    let mut remaining = a.clone();
    for (key, set) in b {
        if let Some(current) = remaining.get_mut(key) {
            current.retain(|v| !set.contains(v));
            if current.is_empty() {
                remaining.remove(key);
            }
        }
    }
    remaining
}
