//! Derived, transient views over a user list.
//!
//! These are recomputed on every render from the current filtered list and
//! never persisted.

use crate::User;

use std::collections::BTreeMap;

/// Group users by the uppercased first letter of their name.
///
/// Grouping is case-insensitive but the key itself is always uppercase.
/// Input order is preserved within each group. Users with an empty name are
/// skipped (validation rejects them upstream).
pub fn group_users_by_initial(users: &[User]) -> BTreeMap<char, Vec<User>> {
    let mut grouped: BTreeMap<char, Vec<User>> = BTreeMap::new();

    for user in users {
        let Some(first) = user.name.chars().next() else {
            continue;
        };
        let initial = first.to_uppercase().next().unwrap_or(first);
        grouped.entry(initial).or_default().push(user.clone());
    }

    grouped
}

/// Initials for an avatar: first letter of the first and last word,
/// uppercased. Single-word names yield a single letter.
pub fn get_initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => initial_of(only).into_iter().collect(),
        [first, .., last] => initial_of(first)
            .into_iter()
            .chain(initial_of(last))
            .collect(),
    }
}

fn initial_of(word: &str) -> Option<char> {
    word.chars().next().map(|c| c.to_uppercase().next().unwrap_or(c))
}
