/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibformat_core::options::{AmbiguityStrategy, CitationOptions};
use bibformat_core::{CitationOccurrence, Library, Resource};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Convert a 1-based index into a disambiguation suffix: 1 is `a`, 26 is
/// `z`, 27 is `aa`.
pub fn int_to_letter(n: usize) -> Option<String> {
    if n == 0 {
        return None;
    }
    let mut n = n;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    Some(letters.into_iter().rev().collect())
}

/// Ambiguity found in one document, keyed by resource id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisambiguationState {
    letters: HashMap<String, String>,
    ambiguous: HashSet<String>,
}

impl DisambiguationState {
    /// The year suffix assigned to `id`, if any.
    pub fn letter(&self, id: &str) -> Option<&str> {
        self.letters.get(id).map(String::as_str)
    }

    /// Whether `id` shares its creators and year with another resource.
    pub fn is_ambiguous(&self, id: &str) -> bool {
        self.ambiguous.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ambiguous.is_empty()
    }
}

/// Handles disambiguation of citations sharing creators and year.
pub struct Disambiguator<'a> {
    library: &'a Library,
    options: &'a CitationOptions,
}

impl<'a> Disambiguator<'a> {
    pub fn new(library: &'a Library, options: &'a CitationOptions) -> Self {
        Self { library, options }
    }

    /// Group the cited resources by identity and mark every group holding
    /// more than one resource as ambiguous.
    ///
    /// Letters follow first-seen order within each group and stay with
    /// their resource for the whole document.
    pub fn calculate(&self, occurrences: &[CitationOccurrence]) -> DisambiguationState {
        let mut groups: IndexMap<String, Vec<&str>> = IndexMap::new();
        for occurrence in occurrences {
            let Some(resource) = self.library.get(&occurrence.id) else {
                continue;
            };
            let Some(key) = self.identity(&occurrence.creator_ids, resource) else {
                continue;
            };
            let ids = groups.entry(key).or_default();
            if !ids.contains(&occurrence.id.as_str()) {
                ids.push(&occurrence.id);
            }
        }
        self.resolve(groups)
    }

    /// The same grouping over every resource in the library, for a
    /// bibliography rendered without a document.
    pub fn calculate_library(&self) -> DisambiguationState {
        let mut groups: IndexMap<String, Vec<&str>> = IndexMap::new();
        for resource in self.library.iter() {
            if let Some(key) = self.identity("", resource) {
                groups.entry(key).or_default().push(&resource.id);
            }
        }
        self.resolve(groups)
    }

    fn resolve(&self, groups: IndexMap<String, Vec<&str>>) -> DisambiguationState {
        let mut state = DisambiguationState::default();
        for (key, ids) in groups.into_iter().filter(|(_, ids)| ids.len() > 1) {
            tracing::debug!(%key, count = ids.len(), "ambiguous citation group");
            for (index, id) in ids.into_iter().enumerate() {
                state.ambiguous.insert(id.to_string());
                if self.options.ambiguity == AmbiguityStrategy::YearLetter {
                    if let Some(letter) = int_to_letter(index + 1) {
                        state.letters.insert(id.to_string(), letter);
                    }
                }
            }
        }
        state
    }

    /// `creators|year[|title]`, or `None` for a resource without creators.
    fn identity(&self, creator_ids: &str, resource: &Resource) -> Option<String> {
        let creators = if creator_ids.is_empty() {
            resource.primary_creators()?.ids_key()
        } else {
            creator_ids.to_string()
        };
        if creators.is_empty() {
            return None;
        }
        let mut key = format!("{}|{}", creators, resource.year().unwrap_or_default());
        if self.options.ambiguity_includes_title {
            key.push('|');
            key.push_str(&resource.title().unwrap_or_default().to_lowercase());
        }
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_bijective_base_26() {
        assert_eq!(int_to_letter(0), None);
        assert_eq!(int_to_letter(1).as_deref(), Some("a"));
        assert_eq!(int_to_letter(26).as_deref(), Some("z"));
        assert_eq!(int_to_letter(27).as_deref(), Some("aa"));
        assert_eq!(int_to_letter(28).as_deref(), Some("ab"));
        assert_eq!(int_to_letter(702).as_deref(), Some("zz"));
        assert_eq!(int_to_letter(703).as_deref(), Some("aaa"));
    }
}
