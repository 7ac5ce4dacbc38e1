//! Entity: an `id`-keyed record with arbitrary additional fields
//!
//! Entities are schema-free from the store's perspective. The only field the
//! system interprets is `id`, which must be unique within a collection.
//! Everything else is an ordered field map validated (if at all) by the
//! caller.
//!
//! ## Wire Format
//!
//! An entity serializes as a single flat JSON object: `{"id": "...", ...}`.
//! A persisted collection is a JSON array of such objects.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel returned when a field is absent
///
/// Lets the view pipeline treat "missing field" and "null field" uniformly
/// without allocating.
static NULL: Value = Value::Null;

/// A uniquely `id`-keyed record with arbitrary additional fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier within the owning collection
    pub id: String,
    /// All remaining fields, in field-name order
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Entity {
    /// Create an entity with no fields beyond `id`
    pub fn new(id: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder: set a field and return the entity
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field in place
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a field by key, treating absence as `Null`
    ///
    /// The special key `"id"` resolves to the entity id so that columns can
    /// display it without the caller mirroring it into the field map.
    pub fn value_of(&self, key: &str) -> ValueRef<'_> {
        if key == "id" {
            return ValueRef::Id(&self.id);
        }
        match self.fields.get(key) {
            Some(v) => ValueRef::Field(v),
            None => ValueRef::Field(&NULL),
        }
    }
}

/// Borrowed view of an entity field used by the table pipeline
///
/// `id` is stored as a plain `String` on [`Entity`], not as a `Value`, so a
/// by-reference lookup needs a two-armed type.
#[derive(Debug, Clone, Copy)]
pub enum ValueRef<'a> {
    /// The entity id
    Id(&'a str),
    /// A regular field (or the shared `Null` sentinel when absent)
    Field(&'a Value),
}

impl ValueRef<'_> {
    /// Materialize as an owned [`Value`]
    pub fn to_value(self) -> Value {
        match self {
            ValueRef::Id(s) => Value::Str(s.to_string()),
            ValueRef::Field(v) => v.clone(),
        }
    }

    /// Render for search matching and raw export
    pub fn to_display_string(self) -> String {
        match self {
            ValueRef::Id(s) => s.to_string(),
            ValueRef::Field(v) => v.to_display_string(),
        }
    }

    /// Compare against another field value with the total cross-type order
    pub fn total_cmp(self, other: ValueRef<'_>) -> std::cmp::Ordering {
        match (self, other) {
            (ValueRef::Id(a), ValueRef::Id(b)) => a.cmp(b),
            _ => self.to_value().total_cmp(&other.to_value()),
        }
    }

    /// Typed equality against an owned value
    pub fn matches(self, other: &Value) -> bool {
        match self {
            ValueRef::Id(s) => other.as_str() == Some(s),
            ValueRef::Field(v) => v == other,
        }
    }

    /// True if this is the null sentinel
    pub fn is_null(self) -> bool {
        matches!(self, ValueRef::Field(Value::Null))
    }
}
