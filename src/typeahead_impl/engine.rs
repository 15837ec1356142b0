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

use std::sync::Arc;

use tokio::{sync::mpsc,
            time::{sleep_until, Instant}};

use crate::{split_anchored_prefix,
            Debouncer,
            LookupRequest,
            LookupResponse,
            SafeTypeaheadState,
            SuggestionProvider,
            TypeaheadConfig,
            TypeaheadEvent,
            TypeaheadSignal,
            CHANNEL_CAPACITY};

/// The monitor task behind one [`crate::Typeahead`] instance. It owns every mutation of
/// [`crate::TypeaheadState`], which is why no locking discipline beyond the single state
/// mutex is needed: signals, debounce countdowns, lookup responses, and the blur grace
/// countdown are all serialized through one `tokio::select!` loop.
///
/// Debouncing limits the dispatch rate, not response latency, so several lookups can be
/// outstanding at once. Their responses all funnel into `response_receiver`, and the
/// stale-response guard in [`crate::TypeaheadState::search_id`] decides which one is
/// allowed to update visible state.
pub struct TypeaheadEngine {
    pub config: TypeaheadConfig,
    pub provider: Arc<dyn SuggestionProvider>,
    pub safe_state: SafeTypeaheadState,
    pub event_sender: mpsc::Sender<TypeaheadEvent>,
    pub response_sender: mpsc::Sender<LookupResponse>,
    pub debouncer: Debouncer,
    /// Armed on loss of input focus; a successful commit before it elapses cancels it.
    pub maybe_blur_deadline: Option<Instant>,
}

/// Spawn the engine task. It runs until the [`crate::Typeahead`] handle (and with it the
/// signal sender) is dropped, which closes the signal channel and initiates shutdown.
pub fn spawn_engine_task(
    config: TypeaheadConfig,
    provider: Arc<dyn SuggestionProvider>,
    safe_state: SafeTypeaheadState,
    event_sender: mpsc::Sender<TypeaheadEvent>,
    mut signal_receiver: mpsc::Receiver<TypeaheadSignal>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let (response_sender, mut response_receiver) =
            mpsc::channel::<LookupResponse>(CHANNEL_CAPACITY);

        let mut engine = TypeaheadEngine {
            debouncer: Debouncer::new(config.delay),
            config,
            provider,
            safe_state,
            event_sender,
            response_sender,
            maybe_blur_deadline: None,
        };

        loop {
            let maybe_dispatch_deadline = engine.debouncer.deadline();
            let maybe_blur_deadline = engine.maybe_blur_deadline;

            tokio::select! {
                // Branch: Poll signal channel for host input.
                // This branch is cancel safe because recv is cancel safe.
                maybe_signal = signal_receiver.recv() => {
                    match maybe_signal {
                        Some(signal) => engine.process_signal(signal).await,
                        // Channel is closed (handle dropped). Initiate shutdown.
                        None => break,
                    }
                },

                // Branch: Debounce countdown elapsed without being superseded.
                // This branch is cancel safe because sleep_until is cancel safe.
                _ = sleep_until_deadline(maybe_dispatch_deadline),
                    if maybe_dispatch_deadline.is_some() =>
                {
                    if let Some(query) = engine.debouncer.fire() {
                        engine.dispatch_lookup(query);
                    }
                },

                // Branch: Poll lookup response channel.
                // This branch is cancel safe because recv is cancel safe.
                maybe_response = response_receiver.recv() => {
                    if let Some(response) = maybe_response {
                        engine.process_response(response);
                    }
                },

                // Branch: Blur grace countdown elapsed; no commit claimed it.
                // This branch is cancel safe because sleep_until is cancel safe.
                _ = sleep_until_deadline(maybe_blur_deadline),
                    if maybe_blur_deadline.is_some() =>
                {
                    engine.maybe_blur_deadline = None;
                    engine.safe_state.lock().unwrap().visibility.close();
                },
            }
        }
    })
}

/// Bridges `Option<Instant>` deadlines into `tokio::select!`: an unarmed deadline never
/// completes (its branch is also disabled by the `if` precondition).
async fn sleep_until_deadline(maybe_deadline: Option<Instant>) {
    match maybe_deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

enum CursorDirection {
    Up,
    Down,
}

impl TypeaheadEngine {
    pub async fn process_signal(&mut self, signal: TypeaheadSignal) {
        match signal {
            TypeaheadSignal::QueryChanged(text) => {
                if text.is_empty() {
                    // An emptied query also disarms any pending dispatch, so a lookup
                    // for deleted text can never fire.
                    self.debouncer.cancel();
                    let mut state = self.safe_state.lock().unwrap();
                    state.query.clear();
                    state.close_and_clear();
                } else {
                    self.safe_state.lock().unwrap().query = text.clone();
                    self.debouncer.schedule(text, Instant::now());
                }
            }

            TypeaheadSignal::MoveUp => self.move_cursor(CursorDirection::Up).await,

            TypeaheadSignal::MoveDown => self.move_cursor(CursorDirection::Down).await,

            TypeaheadSignal::Commit => {
                let maybe_index = self.safe_state.lock().unwrap().cursor.maybe_index;
                if let Some(index) = maybe_index {
                    self.commit_index(index).await;
                }
            }

            TypeaheadSignal::CommitIndex(index) => self.commit_index(index).await,

            TypeaheadSignal::DismissKey | TypeaheadSignal::ExternalDismiss => {
                self.safe_state.lock().unwrap().visibility.close();
            }

            TypeaheadSignal::Blur => {
                self.maybe_blur_deadline =
                    Some(Instant::now() + self.config.blur_grace_delay);
            }
        }
    }

    /// Assign the next search id and hand the lookup to the provider on a spawned task.
    /// The task is never cancelled; if a newer dispatch supersedes it, its response is
    /// discarded by id comparison in [`Self::process_response`].
    pub fn dispatch_lookup(&mut self, query: String) {
        let id = self.safe_state.lock().unwrap().search_id.next_id();
        let request = LookupRequest { id, query };
        tracing::debug!(id = request.id, query = %request.query, "typeahead: dispatch lookup");

        let provider = self.provider.clone();
        let response_sender = self.response_sender.clone();
        tokio::spawn(async move {
            let outcome = provider.lookup(&request.query).await;
            // Send failure means the engine has shut down; drop the response.
            let _ = response_sender
                .send(LookupResponse {
                    id: request.id,
                    query: request.query,
                    outcome,
                })
                .await;
        });
    }

    /// Apply one lookup response. Everything here happens under a single lock of the
    /// state mutex, so options, raw results, cursor, and visibility change atomically
    /// with respect to each other.
    pub fn process_response(&mut self, response: LookupResponse) {
        let mut state = self.safe_state.lock().unwrap();

        if !state.search_id.accept(response.id) {
            tracing::debug!(id = response.id, "typeahead: discard stale lookup response");
            return;
        }

        match response.outcome {
            // Contain the failure: log it, leave visibility/options/selection as is.
            Err(report) => {
                tracing::error!(id = response.id, error = %report, "typeahead: lookup failed");
            }

            Ok(result_set) => {
                if result_set.results.is_empty() {
                    state.close_and_clear();
                    return;
                }

                let matched_query = result_set
                    .maybe_matched_query
                    .unwrap_or_else(|| response.query.clone());
                let options = result_set
                    .results
                    .iter()
                    .map(|raw_result| split_anchored_prefix(&matched_query, raw_result))
                    .collect();
                state.install_results(result_set.results, options);
            }
        }
    }

    async fn move_cursor(&mut self, direction: CursorDirection) {
        let maybe_new_index = {
            let mut state = self.safe_state.lock().unwrap();
            // Keyboard navigation is a no-op while the list is closed.
            if !state.visibility.is_open() {
                return;
            }
            let option_count = state.options.len();
            match direction {
                CursorDirection::Up => state.cursor.move_up(option_count),
                CursorDirection::Down => state.cursor.move_down(option_count),
            }
        };

        // The core computes which index is selected; the UI collaborator owns the
        // pixel-level scroll.
        if let Some(new_index) = maybe_new_index {
            let _ = self
                .event_sender
                .send(TypeaheadEvent::ScrollIntoView(new_index))
                .await;
        }
    }

    /// Commit the raw (untransformed) result at `index`. Out of bounds is a silent
    /// no-op, not an error. A successful commit supersedes a pending blur-grace close
    /// with its own close.
    async fn commit_index(&mut self, index: usize) {
        let maybe_raw_result = {
            let mut state = self.safe_state.lock().unwrap();
            let maybe_raw_result = state.results.get(index).cloned();
            if maybe_raw_result.is_some() {
                state.visibility.close();
            }
            maybe_raw_result
        };

        if let Some(raw_result) = maybe_raw_result {
            self.maybe_blur_deadline = None;
            tracing::debug!(index, value = %raw_result, "typeahead: commit selection");
            let _ = self
                .event_sender
                .send(TypeaheadEvent::Commit(raw_result))
                .await;
        }
    }
}
