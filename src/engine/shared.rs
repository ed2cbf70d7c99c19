// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cloneable, lock-guarded engine handle.
//!
//! Writers (`index`, `remove`) take the write lock; readers (`search`,
//! `suggest`) share the read lock. Behavior is exactly that of the wrapped
//! [`SearchEngine`].

use super::{SearchEngine, SearchOptions};
use crate::types::{Fields, Payload, SearchResult};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

#[derive(Debug)]
pub struct SharedSearchEngine<T> {
    inner: Arc<RwLock<SearchEngine<T>>>,
}

impl<T> Clone for SharedSearchEngine<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedSearchEngine<T> {
    fn default() -> Self {
        Self::new(SearchEngine::new())
    }
}

impl<T> From<SearchEngine<T>> for SharedSearchEngine<T> {
    fn from(engine: SearchEngine<T>) -> Self {
        Self::new(engine)
    }
}

impl<T> SharedSearchEngine<T> {
    pub fn new(engine: SearchEngine<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn index(&self, doc_id: impl Into<String>, document: T, text: &str, fields: Fields) {
        self.inner.write().index(doc_id, document, text, fields);
    }

    pub fn remove(&self, doc_id: &str) -> bool {
        self.inner.write().remove(doc_id)
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.inner.read().suggest(prefix, limit)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Hold the read lock for several calls in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, SearchEngine<T>> {
        self.inner.read()
    }

    /// Hold the write lock, e.g. to index a batch without interleaved readers.
    pub fn write(&self) -> RwLockWriteGuard<'_, SearchEngine<T>> {
        self.inner.write()
    }
}

impl<T: Payload + Clone> SharedSearchEngine<T> {
    pub fn search(&self, query: &str) -> SearchResult<T> {
        self.inner.read().search(query)
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchResult<T> {
        self.inner.read().search_with(query, options)
    }
}
