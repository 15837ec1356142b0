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

//! The `r3bl_typeahead` library is an async, reusable input-augmentation controller for
//! any interactive text-entry surface that needs type-ahead suggestions: search boxes,
//! tag pickers, command palettes, REPL prompts. As the user types, it asynchronously
//! fetches suggestion lists from an external provider, debounces and de-duplicates
//! overlapping requests, tracks a keyboard-navigable cursor over the current suggestion
//! set, and emits a single "selection committed" event when the user commits a choice.
//!
//! # Why use this crate
//!
//! Type-ahead looks trivial and is not, because two things race:
//!
//! 1. Multiple in-flight asynchronous lookups race against fast typing. Debouncing
//!    limits the *dispatch* rate, not response latency, so several lookups can be
//!    outstanding at once and can complete in any order. This crate tags every dispatch
//!    with a strictly increasing search id and only ever applies the response belonging
//!    to the latest one, so accepted state mutations follow dispatch order no matter
//!    what order the network answers in. The lookup capability never needs to support
//!    cancellation.
//! 2. Keyboard navigation must stay consistent with whatever result set is currently
//!    authoritative. The option list, raw result list, selection cursor, and visibility
//!    flag all live behind one mutex and change together, atomically.
//!
//! # Features
//!
//! 1. [`Typeahead`]: the controller handle. Feed it [`TypeaheadSignal`]s (query
//!    changes, cursor moves, commit/dismiss/blur), read [`TypeaheadEvent`]s (committed
//!    raw result, scroll-into-view hints), and hand [`Typeahead::render_snapshot`] to
//!    your rendering code. Everything the controller owns is driven by a single spawned
//!    engine task with a `tokio::select!` loop; drop the handle to shut it down.
//! 2. [`SuggestionProvider`]: the dependency-injected suggestion backend, a pure
//!    query → future-of-[`ResultSet`] capability. Mock it in tests (this crate's own
//!    tests inject providers with canned latencies to reproduce lookup races
//!    deterministically).
//! 3. Prefix/completion splitting via [`split_anchored_prefix`]: case-insensitive,
//!    anchored at the start, grapheme-cluster safe, with a plain-completion fallback
//!    for provider results that don't actually contain the typed prefix.
//! 4. A grace delay on loss of focus ([`TypeaheadConfig::blur_grace_delay`]), so a
//!    pointer-driven selection can still land before the list is torn down.
//! 5. A crossterm boundary adapter ([`try_map_key_event`], [`typeahead_signal_stream`],
//!    [`spawn_signal_pump`]) that maps arrow/enter/escape key codes to signals exactly
//!    once, at the edge.
//! 6. Tokio tracing for diagnostics: lookup dispatches and stale-response discards at
//!    debug level, contained lookup failures at error level. See [`init_tracing`] for
//!    an optional display-layer setup.
//!
//! # How to use this crate
//!
//! ```no_run
//! use std::sync::Arc;
//! use r3bl_typeahead::{PinnedLookupFuture, ResultSet, Typeahead, TypeaheadConfig,
//!                      TypeaheadEvent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = |query: &str| -> PinnedLookupFuture {
//!         let query = query.to_string();
//!         Box::pin(async move {
//!             // Call your search backend here.
//!             Ok(ResultSet::from(vec![format!("{query}alog")]))
//!         })
//!     };
//!
//!     let (typeahead, mut event_receiver) =
//!         Typeahead::new(Arc::new(provider), TypeaheadConfig::default());
//!
//!     // Wire your text field's value changes and key events in:
//!     typeahead.on_query_changed("cat").await;
//!     typeahead.on_move_down().await;
//!     typeahead.on_commit().await;
//!
//!     while let Some(event) = event_receiver.recv().await {
//!         if let TypeaheadEvent::Commit(value) = event {
//!             println!("committed: {value}");
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! What is deliberately *not* here: dropdown rendering and layout, pixel scroll math,
//! event-system wiring, styling, and the suggestion backend itself. Those belong to the
//! host; this crate computes which state they should present.

// Attach sources.
pub mod public_api;
pub mod tracing_logging;
pub mod typeahead_impl;

#[cfg(test)]
pub mod test_fixtures;

// Re-export the public API.
pub use public_api::*;
pub use tracing_logging::*;
pub use typeahead_impl::*;

// Type aliases.
use std::{pin::Pin, sync::Arc};

use futures_core::Stream;

pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SafeTypeaheadState = Arc<StdMutex<TypeaheadState>>;

pub type CrosstermEventResult = Result<crossterm::event::Event, std::io::Error>;
pub type PinnedEventStream = Pin<Box<dyn Stream<Item = CrosstermEventResult> + Send>>;
pub type PinnedSignalStream = Pin<Box<dyn Stream<Item = TypeaheadSignal> + Send>>;

// Constants.
use std::time::Duration;

pub const CHANNEL_CAPACITY: usize = 1_000;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_BLUR_GRACE_DELAY: Duration = Duration::from_millis(150);
