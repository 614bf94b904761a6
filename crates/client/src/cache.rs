//! In-memory response cache.
//!
//! Entries are keyed by operation name plus the canonical JSON of the
//! variables, and hold the response's `data` object. The cache lives as long
//! as the client that owns it; clones of a client share it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::documents::Document;
use crate::error::ClientResult;

/// Whether a read may be answered from (and recorded into) the cache.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve a cached result for the same document + variables; otherwise fetch and store.
    #[default]
    CacheFirst,
    /// Always fetch; store the result.
    NetworkOnly,
    /// Always fetch; never read or write the cache.
    NoCache,
}

impl FetchPolicy {
    pub fn reads_cache(self) -> bool {
        matches!(self, FetchPolicy::CacheFirst)
    }

    pub fn writes_cache(self) -> bool {
        !matches!(self, FetchPolicy::NoCache)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    variables: String,
}

impl CacheKey {
    pub fn new(document: &Document, variables: &Value) -> Self {
        let mut canonical = String::new();
        write_canonical(variables, &mut canonical);
        Self {
            operation: document.operation_name,
            variables: canonical,
        }
    }
}

/// Serialize with object keys sorted so `{a,b}` and `{b,a}` share an entry.
///
/// serde_json's default map is already sorted; this keeps keys stable when a
/// dependency enables its `preserve_order` feature.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(value, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<CacheKey, Value>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached `data` for `document` with `variables`, if present.
    pub fn read_query(&self, document: &Document, variables: &Value) -> Option<Value> {
        self.read(&CacheKey::new(document, variables))
    }

    /// Record `data` as the result of `document` with `variables`.
    ///
    /// `data` must have the shape the document's selection produces, so that
    /// a later read decodes exactly like a network response would.
    pub fn write_query<T>(&self, document: &Document, variables: &Value, data: &T) -> ClientResult<()>
    where
        T: Serialize,
    {
        let data = serde_json::to_value(data)?;
        self.write(CacheKey::new(document, variables), data);
        Ok(())
    }

    pub fn evict(&self, document: &Document, variables: &Value) -> bool {
        self.entries
            .write()
            .remove(&CacheKey::new(document, variables))
            .is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub(crate) fn read(&self, key: &CacheKey) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    pub(crate) fn write(&self, key: CacheKey, data: Value) {
        self.entries.write().insert(key, data);
    }
}
