/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Resource data as supplied by loaders.
//!
//! Loaders (database rows, BibTeX entries, preview generators) hand the core
//! already-unescaped values. An [`Item`] is the flat field map a template is
//! rendered against; a [`Resource`] is the raw record an `Item` is prepared
//! from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field values for exactly one resource instance.
///
/// A missing value and an empty value are the same thing: [`Item::get`]
/// returns `None` for both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(IndexMap<String, String>);

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// The non-empty value of `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether `field` has a non-empty value.
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.shift_remove(field)
    }

    /// Copy every non-empty value from `other` over this item.
    pub fn merge(&mut self, other: &Item) {
        for (field, value) in other.iter() {
            self.insert(field, value);
        }
    }

    /// Iterate over non-empty fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Item {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

/// Singular/plural switches consulted by `^singular^plural^` markers.
///
/// Keys are field names: creator fields carry the plural flag of their
/// creator list, `pages` carries whether the locator is a range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralFlags(HashMap<String, bool>);

impl PluralFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, plural: bool) {
        self.0.insert(field.into(), plural);
    }

    /// Unknown fields are singular.
    pub fn is_plural(&self, field: &str) -> bool {
        self.0.get(field).copied().unwrap_or(false)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for PluralFlags {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One creator (author, editor, translator, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorName {
    pub surname: String,
    pub firstname: String,
    /// Initials of middle names not spelled out in `firstname`, e.g. `"S"`
    /// or `"S. T."`.
    pub initials: String,
    /// Surname particle such as "van" or "de".
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CreatorName {
    pub fn new(surname: impl Into<String>, firstname: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            firstname: firstname.into(),
            ..Default::default()
        }
    }

    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// A stable identity for the creator: the database id when known,
    /// otherwise the lower-cased full name.
    pub fn identity(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!(
                "{} {} {}",
                self.prefix.to_lowercase(),
                self.surname.to_lowercase(),
                self.firstname.to_lowercase()
            )
            .trim()
            .to_string(),
        }
    }
}

/// An ordered creator list. Order is significant and preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatorList(pub Vec<CreatorName>);

impl CreatorList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CreatorName> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&CreatorName> {
        self.0.first()
    }

    /// Comma-joined creator identities, used as a disambiguation key.
    pub fn ids_key(&self) -> String {
        self.0
            .iter()
            .map(CreatorName::identity)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<Vec<CreatorName>> for CreatorList {
    fn from(names: Vec<CreatorName>) -> Self {
        Self(names)
    }
}

impl FromIterator<CreatorName> for CreatorList {
    fn from_iter<I: IntoIterator<Item = CreatorName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A raw bibliographic record.
///
/// `fields` holds loader values (`title`, `subtitle`, `year1`, `day`,
/// `month`, `pageStart`, `pageEnd`, `edition`, `runningTime`, ...);
/// `creators` holds one list per creator field (`creator1` .. `creator5`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub fields: Item,
    pub creators: IndexMap<String, CreatorList>,
}

impl Resource {
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field, value);
        self
    }

    pub fn with_creators(mut self, field: impl Into<String>, creators: CreatorList) -> Self {
        self.creators.insert(field.into(), creators);
        self
    }

    /// The non-empty creator list stored under `field`.
    pub fn creators(&self, field: &str) -> Option<&CreatorList> {
        self.creators.get(field).filter(|list| !list.is_empty())
    }

    /// Primary creators, falling back to the secondary list (typically
    /// editors) when there are no primary creators.
    pub fn primary_creators(&self) -> Option<&CreatorList> {
        self.creators("creator1").or_else(|| self.creators("creator2"))
    }

    pub fn year(&self) -> Option<&str> {
        self.fields.get("year1")
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title")
    }
}

/// All resources available to a render, keyed by id, in bibliography order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Resource>", into = "Vec<Resource>")]
pub struct Library(IndexMap<String, Resource>);

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resource: Resource) {
        self.0.insert(resource.id.clone(), resource);
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.0.get(id)
    }

    /// Position of `id` in bibliography order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Resource>> for Library {
    fn from(resources: Vec<Resource>) -> Self {
        resources.into_iter().collect()
    }
}

impl From<Library> for Vec<Resource> {
    fn from(library: Library) -> Self {
        library.0.into_values().collect()
    }
}

impl FromIterator<Resource> for Library {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        let mut library = Library::new();
        for resource in iter {
            library.insert(resource);
        }
        library
    }
}
