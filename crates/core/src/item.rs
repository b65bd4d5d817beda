// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Items and collections returned by remote list endpoints.
//!
//! A [`Collection`] is the decoded body of an endpoint such as
//! `GET /list_students`: a JSON array of objects that each carry an `id`.
//! Everything besides the `id` is kept as opaque JSON so the sync engine
//! never needs to know the shape of the rows it moves around.

use std::collections::HashSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of an item: the backend may use integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

impl ItemId {
    /// Parses a command-line style identifier.
    ///
    /// Only the canonical decimal spelling becomes [`ItemId::Int`]; forms
    /// like `007` or `+5` stay strings so they reach the server unchanged.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidInput("id cannot be empty".to_string()));
        }
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Ok(ItemId::Int(n)),
            _ => Ok(ItemId::Str(raw.to_string())),
        }
    }
}

/// A single row of a remote list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// All remaining fields, untouched.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Creates an item with no additional fields.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Item {
            id: id.into(),
            fields: serde_json::Map::new(),
        }
    }

    /// Builder-style helper to attach a field.
    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Returns a string field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }
}

/// Ordered sequence of items as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<Item>);

impl Collection {
    pub fn new(items: Vec<Item>) -> Self {
        Collection(items)
    }

    /// The empty collection rendered when a query is too short to fetch.
    pub fn empty() -> Self {
        Collection(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn into_items(self) -> Vec<Item> {
        self.0
    }

    /// Item ids in server order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.0.iter().map(|item| item.id.clone()).collect()
    }

    /// Projects every item onto a typed row.
    ///
    /// Fails with [`Error::Decode`] on the first item that does not fit `T`.
    pub fn decode_items<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.0
            .iter()
            .map(|item| {
                let value = serde_json::to_value(item)?;
                serde_json::from_value(value).map_err(|e| {
                    Error::Decode(format!("item {}: {}", item.id, e))
                })
            })
            .collect()
    }

    /// Compares this collection against a previously rendered one by id.
    ///
    /// `added` and `retained` follow this collection's order, `removed`
    /// follows the previous collection's order.
    pub fn diff(&self, previous: &Collection) -> CollectionDiff {
        let before: HashSet<&ItemId> = previous.0.iter().map(|item| &item.id).collect();
        let after: HashSet<&ItemId> = self.0.iter().map(|item| &item.id).collect();

        let mut diff = CollectionDiff::default();
        for item in &self.0 {
            if before.contains(&item.id) {
                diff.retained.push(item.id.clone());
            } else {
                diff.added.push(item.id.clone());
            }
        }
        for item in &previous.0 {
            if !after.contains(&item.id) {
                diff.removed.push(item.id.clone());
            }
        }
        diff
    }
}

impl From<Vec<Item>> for Collection {
    fn from(items: Vec<Item>) -> Self {
        Collection(items)
    }
}

impl FromIterator<Item> for Collection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Collection(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of [`Collection::diff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionDiff {
    pub added: Vec<ItemId>,
    pub removed: Vec<ItemId>,
    pub retained: Vec<ItemId>,
}

impl CollectionDiff {
    /// True when the set of ids did not change.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Decodes a response body into a [`Collection`].
///
/// The body must be a JSON array whose elements are objects with an integer
/// or string `id`; anything else is a [`Error::Decode`].
pub fn decode_collection(body: &[u8]) -> Result<Collection> {
    serde_json::from_slice::<Collection>(body).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
