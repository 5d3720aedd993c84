/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Mutable state carried across one document render.
//!
//! A [`RenderSession`] is owned by the caller and passed by reference into
//! the sequencer and the bibliography processor. Nothing else keeps state,
//! so two documents rendered with two sessions never interfere.

use crate::processor::citation::DisambiguationState;
use std::collections::{HashMap, HashSet};

/// Repetition bookkeeping: creators of the last bibliography entry and the
/// citation history used for ibid, idem, op. cit. and endnote ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatState {
    last_creators: Option<String>,
    /// Resource id and page locator of the previous citation.
    last_citation: Option<(String, Option<String>)>,
    cited: HashSet<String>,
    endnote_ids: HashMap<String, usize>,
    next_endnote: usize,
}

impl RepeatState {
    pub fn last_creators(&self) -> Option<&str> {
        self.last_creators.as_deref()
    }

    pub fn set_last_creators(&mut self, creators: &str) {
        self.last_creators = Some(creators.to_string());
    }

    /// Forget the previous entry's creators, e.g. at the start of a
    /// bibliography.
    pub fn reset_creators(&mut self) {
        self.last_creators = None;
    }

    /// Whether the previous citation was of `id`, and if so whether its
    /// locator equals `pages`.
    pub fn repeats_last(&self, id: &str, pages: Option<&str>) -> Option<bool> {
        let (last_id, last_pages) = self.last_citation.as_ref()?;
        (last_id == id).then(|| last_pages.as_deref() == pages)
    }

    pub fn was_cited(&self, id: &str) -> bool {
        self.cited.contains(id)
    }

    pub fn has_citations(&self) -> bool {
        !self.cited.is_empty()
    }

    /// Record a citation of `id` with its locator.
    pub fn record_citation(&mut self, id: &str, pages: Option<&str>) {
        self.cited.insert(id.to_string());
        self.last_citation = Some((id.to_string(), pages.map(str::to_string)));
    }

    /// Break the ibid chain, e.g. after a citation that failed to resolve.
    pub fn clear_last_citation(&mut self) {
        self.last_citation = None;
    }

    /// The next endnote id; ids start at 1.
    pub fn next_endnote_id(&mut self) -> usize {
        self.next_endnote += 1;
        self.next_endnote
    }

    /// The endnote id already given to `id`.
    pub fn endnote_id(&self, id: &str) -> Option<usize> {
        self.endnote_ids.get(id).copied()
    }

    /// Give `id` the next endnote id unless it has one. Returns the id and
    /// whether it is new.
    pub fn endnote_id_for(&mut self, id: &str) -> (usize, bool) {
        if let Some(existing) = self.endnote_id(id) {
            return (existing, false);
        }
        let assigned = self.next_endnote_id();
        self.endnote_ids.insert(id.to_string(), assigned);
        (assigned, true)
    }

    /// Give `id` the endnote id `number` unless it has one.
    pub fn fixed_endnote_id(&mut self, id: &str, number: usize) -> (usize, bool) {
        if let Some(existing) = self.endnote_id(id) {
            return (existing, false);
        }
        self.endnote_ids.insert(id.to_string(), number);
        (number, true)
    }
}

/// Everything that lives for one document render.
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    disambiguation: DisambiguationState,
    repeat: RepeatState,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all state at a document boundary.
    pub fn new_document(&mut self) {
        tracing::debug!("starting new document");
        *self = Self::default();
    }

    pub fn disambiguation(&self) -> &DisambiguationState {
        &self.disambiguation
    }

    pub fn set_disambiguation(&mut self, state: DisambiguationState) {
        self.disambiguation = state;
    }

    pub fn repeat(&self) -> &RepeatState {
        &self.repeat
    }

    pub fn repeat_mut(&mut self) -> &mut RepeatState {
        &mut self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_last_compares_locators() {
        let mut repeat = RepeatState::default();
        assert_eq!(repeat.repeats_last("a", None), None);

        repeat.record_citation("a", Some("12"));
        assert_eq!(repeat.repeats_last("a", Some("12")), Some(true));
        assert_eq!(repeat.repeats_last("a", Some("13")), Some(false));
        assert_eq!(repeat.repeats_last("b", Some("12")), None);
        assert!(repeat.was_cited("a"));
        assert!(!repeat.was_cited("b"));
    }

    #[test]
    fn endnote_ids_are_stable_per_resource() {
        let mut repeat = RepeatState::default();
        assert_eq!(repeat.endnote_id_for("a"), (1, true));
        assert_eq!(repeat.endnote_id_for("b"), (2, true));
        assert_eq!(repeat.endnote_id_for("a"), (1, false));
        assert_eq!(repeat.next_endnote_id(), 3);
    }

    #[test]
    fn new_document_resets_everything() {
        let mut session = RenderSession::new();
        session.repeat_mut().set_last_creators("Smith");
        session.repeat_mut().record_citation("a", None);
        session.new_document();
        assert_eq!(session.repeat(), &RepeatState::default());
    }
}
