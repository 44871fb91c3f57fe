//! English singularization for model-name inference.
//!
//! The rule table mirrors the conventional web-framework inflector: uncountable
//! words are left alone, irregular plurals are looked up against the last word
//! of a `CamelCase` name, and everything else goes through ordered suffix rules.
//! Coverage beyond that table is not attempted; unknown plurals fall through to
//! the trailing-`s` rule.

mod rules;

use rules::{IRREGULAR, SINGULAR_RULES, UNCOUNTABLE};

/// Convert a (possibly `CamelCase`) plural noun to its singular form.
///
/// Words that are already singular come back unchanged.
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (head, last) = split_last_word(word);
    let last_lower = last.to_lowercase();

    if UNCOUNTABLE.contains(&last_lower.as_str()) {
        return word.to_string();
    }

    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == last_lower) {
        return format!("{head}{}", match_case(singular, last));
    }

    if IRREGULAR.iter().any(|(singular, _)| *singular == last_lower) {
        return word.to_string();
    }

    for (pattern, replacement) in SINGULAR_RULES.iter() {
        if pattern.is_match(word) {
            let singular = pattern.replace(word, *replacement);
            return match_case(&singular, word);
        }
    }

    word.to_string()
}

/// Lowercase only the first character (`UserProfile` -> `userProfile`).
#[must_use]
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a `CamelCase` word into everything before its last capitalized word
/// and that word (`AdminPeople` -> `("Admin", "People")`).
fn split_last_word(word: &str) -> (&str, &str) {
    let boundary = word
        .char_indices()
        .rev()
        .find(|(i, c)| *i > 0 && c.is_uppercase())
        .map_or(0, |(i, _)| i);
    word.split_at(boundary)
}

/// Carry the casing of `original` over to `value`: all-caps stays all-caps,
/// a leading capital stays a leading capital.
fn match_case(value: &str, original: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    if has_letters && !original.chars().any(char::is_lowercase) {
        return value.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = value.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    value.to_string()
}

#[cfg(test)]
#[path = "../inflect_tests.rs"]
mod inflect_tests;
