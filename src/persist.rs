//! Snapshot persistence: format, tolerant decoding, repair and stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine hands out a [`Snapshot`] after each mutation of the item set
//! and the host writes it through a [`StateStore`]. On startup the store's
//! snapshot is decoded leniently (a malformed item is skipped, not fatal) and
//! then repaired against the current config by [`sanitize`]. Any store error
//! is the caller's to log; the simulation then starts from defaults.
//!
//! The JSON layout keeps the browser build's `localStorage` shape so saved
//! states move between the two:
//! `{"objects":[{"id":0,"x":-100,"weight":4}],"nextId":1,"nextWeight":7}`.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PhysicsConfig;
use crate::doc::{Item, ItemStore};

/// Error returned by [`StateStore`] implementations and [`decode_snapshot`].
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    #[error("state file I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The stored text is not valid JSON.
    #[error("state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The stored JSON is not an object.
    #[error("state has unexpected shape: {0}")]
    Shape(String),
}

/// Durable part of the simulation state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(rename = "objects")]
    pub items: Vec<Item>,
    pub next_id: u64,
    pub next_weight: Option<f64>,
}

/// Source and sink for snapshots.
pub trait StateStore {
    /// Load the saved snapshot. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Snapshot>, PersistError>;

    /// Replace the saved snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError>;
}

/// Decode snapshot JSON, skipping entries that do not parse.
///
/// Only a non-JSON document or a non-object root is an error. A missing or
/// malformed `objects` list yields no items, a bad `nextId` yields 0, and a
/// non-numeric `nextWeight` yields none.
pub fn decode_snapshot(raw: &str) -> Result<Snapshot, PersistError> {
    let root: Value = serde_json::from_str(raw)?;
    let Some(fields) = root.as_object() else {
        return Err(PersistError::Shape(format!("expected an object, found {}", kind_of(&root))));
    };

    let items = fields
        .get("objects")
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |entries| entries.iter().filter_map(parse_item).collect());
    let next_id = fields.get("nextId").and_then(Value::as_u64).unwrap_or(0);
    let next_weight = fields.get("nextWeight").and_then(Value::as_f64);

    Ok(Snapshot { items, next_id, next_weight })
}

/// Encode a snapshot as JSON.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, PersistError> {
    Ok(serde_json::to_string(snapshot)?)
}

fn parse_item(value: &Value) -> Option<Item> {
    match serde_json::from_value::<Item>(value.clone()) {
        Ok(item) => Some(item),
        Err(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A snapshot repaired against the current config.
#[derive(Debug, Clone)]
pub struct Restored {
    pub items: ItemStore,
    pub next_weight: Option<f64>,
    /// Items discarded for a non-finite value, an out-of-range weight or a repeated id.
    pub dropped: usize,
    /// Items whose position was pulled back onto the plank.
    pub clamped: usize,
}

/// Repair a loaded snapshot item by item instead of rejecting it whole.
#[must_use]
pub fn sanitize(snapshot: Snapshot, config: &PhysicsConfig) -> Restored {
    let half = config.half_plank_length;
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(snapshot.items.len());
    let mut dropped = 0;
    let mut clamped = 0;

    for mut item in snapshot.items {
        if !item.position.is_finite() || !config.weight_in_range(item.weight) || !seen.insert(item.id) {
            dropped += 1;
            continue;
        }
        if item.position.abs() > half {
            item.position = item.position.clamp(-half, half);
            clamped += 1;
        }
        kept.push(item);
    }

    let next_weight = snapshot.next_weight.filter(|w| config.weight_in_range(*w));

    Restored { items: ItemStore::from_parts(kept, snapshot.next_id), next_weight, dropped, clamped }
}

/// Snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        decode_snapshot(&raw).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        let raw = encode_snapshot(snapshot)?;
        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store, holding the encoded JSON like a browser's `localStorage` entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with raw text, which need not be valid.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()), saves: 0 }
    }

    /// The raw stored text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        match &self.raw {
            Some(raw) => decode_snapshot(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        self.raw = Some(encode_snapshot(snapshot)?);
        self.saves += 1;
        Ok(())
    }
}
