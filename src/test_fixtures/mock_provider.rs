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

use std::{collections::HashMap, sync::Arc, time::Duration};

use crate::{PinnedLookupFuture, ResultSet, StdMutex, SuggestionProvider};

pub type SafeRecordedQueries = Arc<StdMutex<Vec<String>>>;

/// Instant, infallible provider over a fixed word list: every lookup returns the words
/// that start with the query (case-insensitive), in list order. Records each query it
/// sees, so tests can assert on dispatch counts and texts.
#[derive(Debug, Clone)]
pub struct StaticSuggestionProvider {
    words: Vec<String>,
    recorded_queries: SafeRecordedQueries,
}

impl StaticSuggestionProvider {
    pub fn new(words: Vec<&str>) -> Self {
        Self {
            words: words.into_iter().map(ToString::to_string).collect(),
            recorded_queries: Default::default(),
        }
    }

    /// Points to the same inner value, so it stays readable after the provider is moved
    /// into a [`crate::Typeahead`].
    pub fn clone_recorded_queries(&self) -> SafeRecordedQueries {
        self.recorded_queries.clone()
    }
}

impl SuggestionProvider for StaticSuggestionProvider {
    fn lookup(&self, query: &str) -> PinnedLookupFuture {
        self.recorded_queries.lock().unwrap().push(query.to_string());
        let query_lowercase = query.to_lowercase();
        let results: Vec<String> = self
            .words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&query_lowercase))
            .cloned()
            .collect();
        Box::pin(async move { Ok(ResultSet::from(results)) })
    }
}

#[derive(Debug, Clone, Default)]
struct CannedLookup {
    results: Vec<String>,
    maybe_matched_query: Option<String>,
    latency: Duration,
}

/// Provider with canned, per-query responses and latencies. Unknown queries resolve
/// instantly to zero results. The per-query latency makes lookup races reproducible:
/// give the older query the longer latency and its response arrives after the newer one.
#[derive(Debug, Clone, Default)]
pub struct DelayedSuggestionProvider {
    lookups: HashMap<String, CannedLookup>,
    recorded_queries: SafeRecordedQueries,
}

impl DelayedSuggestionProvider {
    pub fn with_lookup(
        mut self,
        query: &str,
        results: Vec<&str>,
        latency: Duration,
    ) -> Self {
        self.lookups.insert(
            query.to_string(),
            CannedLookup {
                results: results.into_iter().map(ToString::to_string).collect(),
                maybe_matched_query: None,
                latency,
            },
        );
        self
    }

    /// Like [`Self::with_lookup`], but the response reports `matched_query` as the text
    /// the provider actually matched against (provider-side normalization).
    pub fn with_normalized_lookup(
        mut self,
        query: &str,
        matched_query: &str,
        results: Vec<&str>,
        latency: Duration,
    ) -> Self {
        self.lookups.insert(
            query.to_string(),
            CannedLookup {
                results: results.into_iter().map(ToString::to_string).collect(),
                maybe_matched_query: Some(matched_query.to_string()),
                latency,
            },
        );
        self
    }

    pub fn clone_recorded_queries(&self) -> SafeRecordedQueries {
        self.recorded_queries.clone()
    }
}

impl SuggestionProvider for DelayedSuggestionProvider {
    fn lookup(&self, query: &str) -> PinnedLookupFuture {
        self.recorded_queries.lock().unwrap().push(query.to_string());
        let canned = self.lookups.get(query).cloned().unwrap_or_default();
        Box::pin(async move {
            tokio::time::sleep(canned.latency).await;
            Ok(ResultSet {
                results: canned.results,
                maybe_matched_query: canned.maybe_matched_query,
            })
        })
    }
}

/// Wraps a [`StaticSuggestionProvider`] and fails the configured queries with an async
/// error, so failure containment can be exercised.
#[derive(Debug, Clone)]
pub struct FailingSuggestionProvider {
    inner: StaticSuggestionProvider,
    failing_queries: Vec<String>,
}

impl FailingSuggestionProvider {
    pub fn new(inner: StaticSuggestionProvider, failing_queries: Vec<String>) -> Self {
        Self {
            inner,
            failing_queries,
        }
    }
}

impl SuggestionProvider for FailingSuggestionProvider {
    fn lookup(&self, query: &str) -> PinnedLookupFuture {
        if self.failing_queries.iter().any(|it| it == query) {
            let query = query.to_string();
            return Box::pin(async move {
                Err(miette::miette!("lookup backend unavailable for {query:?}"))
            });
        }
        self.inner.lookup(query)
    }
}
