/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{future::Future, pin::Pin};

/// Boxed future returned by [`SuggestionProvider::lookup`].
pub type PinnedLookupFuture = Pin<Box<dyn Future<Output = miette::Result<ResultSet>> + Send>>;

/// The external suggestion-fetching capability, supplied via dependency injection (the
/// same way [`crate::Typeahead`] tests inject mock providers).
///
/// The provider owns no typeahead state; it is a pure query → future-of-results
/// capability. It is not required to support cancellation: superseded lookups are
/// neutralized by id comparison in the engine, not by aborting work. An `Err` outcome is
/// caught and logged by the engine and never alters visibility or selection state.
pub trait SuggestionProvider: Send + Sync {
    fn lookup(&self, query: &str) -> PinnedLookupFuture;
}

/// Any matching closure works as a provider.
impl<F> SuggestionProvider for F
where
    F: Fn(&str) -> PinnedLookupFuture + Send + Sync,
{
    fn lookup(&self, query: &str) -> PinnedLookupFuture { self(query) }
}

/// What a lookup resolves to: the raw results (provider order is authoritative, they are
/// never re-sorted) and optionally the query text the provider actually matched against,
/// which may differ from the dispatched text if the provider normalizes it. When
/// present, the matched query is the one used for prefix splitting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    pub results: Vec<String>,
    pub maybe_matched_query: Option<String>,
}

impl ResultSet {
    pub fn with_matched_query(results: Vec<String>, matched_query: impl Into<String>) -> Self {
        Self {
            results,
            maybe_matched_query: Some(matched_query.into()),
        }
    }
}

/// The bare-sequence form: just results, no normalized query.
impl From<Vec<String>> for ResultSet {
    fn from(results: Vec<String>) -> Self {
        Self {
            results,
            maybe_matched_query: None,
        }
    }
}

impl From<Vec<&str>> for ResultSet {
    fn from(results: Vec<&str>) -> Self {
        Self {
            results: results.into_iter().map(ToString::to_string).collect(),
            maybe_matched_query: None,
        }
    }
}

/// One dispatched lookup. Created when the debounce countdown elapses; the id comes from
/// [`crate::SearchIdGenerator::next_id`] and is never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: u64,
    pub query: String,
}

/// What the lookup task sends back to the engine over the response channel. `query` is
/// echoed from the request so prefix splitting has a fallback when the provider supplies
/// no matched query.
#[derive(Debug)]
pub struct LookupResponse {
    pub id: u64,
    pub query: String,
    pub outcome: miette::Result<ResultSet>,
}
