//! Rendering context
//!
//! A context is the mapping of names to values a template renders against.
//! Views compose contexts explicitly: build a base context with the view's
//! own fields, then merge the caller's extra data on top.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Layers `other` on top of this context; keys from `other` win.
    pub fn merge(&mut self, other: Context) {
        self.values.extend(other.values);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_incoming() {
        let mut base = Context::new().set("subject", "base").set("kept", "yes");
        base.merge(Context::new().set("subject", "override"));

        assert_eq!(base.get("subject").unwrap(), "override");
        assert_eq!(base.get("kept").unwrap(), "yes");
    }

    #[test]
    fn test_set_accepts_mixed_values() {
        let context = Context::new().set("name", "Ada").set("count", 3);
        assert_eq!(context.get("count").unwrap(), 3);
    }
}
