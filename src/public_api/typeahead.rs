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

use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::{spawn_engine_task,
            RenderSnapshot,
            SafeTypeaheadState,
            StdMutex,
            SuggestionProvider,
            TypeaheadConfig,
            TypeaheadState,
            CHANNEL_CAPACITY};

/// # Mental model and overview
///
/// This is the controller for a type-ahead suggestion surface (search box, tag picker,
/// command palette). The host owns the text field, key handling, and rendering; this
/// struct owns the part with actual concurrency and ordering hazards:
/// 1. Debouncing bursts of query changes into at most one pending lookup dispatch.
/// 2. Rejecting stale lookup responses when several are outstanding at once, so visible
///    state mutations follow dispatch order regardless of async completion order.
/// 3. Keeping the keyboard selection cursor consistent with whatever result set is
///    currently authoritative.
/// 4. Deferring the close on focus loss just long enough for a pointer-driven commit to
///    land.
///
/// # Inputs and dependency injection
///
/// The suggestion backend is passed into [`Self::new`] as an
/// `Arc<dyn SuggestionProvider>`. It is typically a network or index lookup; for testing
/// you can provide your own implementation (the tests in this crate inject mock
/// providers with canned latencies to reproduce lookup races deterministically).
///
/// Host input arrives as [`TypeaheadSignal`]s, either through the `on_*` methods or by
/// pumping a signal stream (see [`crate::spawn_signal_pump`] and
/// [`crate::typeahead_signal_stream`] for the crossterm boundary adapter).
///
/// # Outputs
///
/// 1. [`TypeaheadEvent`]s on the receiver returned by [`Self::new`]: one
///    [`TypeaheadEvent::Commit`] per committed selection (carrying the raw result
///    string), and a [`TypeaheadEvent::ScrollIntoView`] hint after every cursor move.
/// 2. [`Self::render_snapshot`] for the rendering collaborator: the open flag and the
///    ordered option list with derived `selected` flags.
///
/// # When to terminate
///
/// There is no `close()` function. Simply drop this struct: that closes the signal
/// channel, which shuts down the engine task.
pub struct Typeahead {
    /// Sender for host-input signals; the engine task holds the receiving end.
    pub signal_sender: mpsc::Sender<TypeaheadSignal>,

    /// All mutable controller state, shared with the engine task.
    pub safe_state: SafeTypeaheadState,
}

/// Host-input signals consumed by [`Typeahead`]. Key-code mapping (arrows, enter,
/// escape) is a host-layer concern, done once at the boundary; see
/// [`crate::try_map_key_event`].
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum TypeaheadSignal {
    /// The text field content changed. Empty text closes and clears immediately; any
    /// other text (re)starts the debounce countdown.
    QueryChanged(String),

    /// Move the selection cursor up (wraps).
    MoveUp,

    /// Move the selection cursor down (wraps).
    MoveDown,

    /// Commit the currently highlighted option (keyboard path, e.g. Enter).
    Commit,

    /// Commit the option at the given row (pointer path, e.g. a click on a row).
    CommitIndex(usize),

    /// Dismiss the list unconditionally (e.g. Escape).
    DismissKey,

    /// The input lost focus; close after the grace delay unless a commit lands first.
    Blur,

    /// A host-observed interaction outside the widget (e.g. a click elsewhere).
    ExternalDismiss,
}

/// Events produced by the engine, exactly in the order the corresponding state changes
/// were applied.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum TypeaheadEvent {
    /// A selection was committed. Carries the raw result string as the provider returned
    /// it, untransformed. Emitted exactly once per successful commit.
    Commit(String),

    /// The cursor moved to this index; the UI collaborator should scroll it into view.
    /// The core computes which index, never pixel offsets.
    ScrollIntoView(usize),
}

/// Error returned from [`Typeahead::try_signal`]. The async `on_*` methods never
/// surface errors (a send failure there just means shutdown); this exists for
/// synchronous host callbacks that need to know whether the signal was accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadError {
    /// The engine task has shut down (its signal channel is closed).
    #[error("typeahead engine has shut down")]
    EngineShutdown,

    /// The host is producing signals faster than the engine drains them.
    #[error("typeahead signal channel is full")]
    ChannelFull,
}

/// Owned token for routing a host-level "interaction outside the widget" notification
/// into the controller. The host acquires it from
/// [`Typeahead::external_dismiss_handle`], keeps it for as long as the widget is active,
/// and simply drops it to unsubscribe. There is no process-global listener to clean up.
#[derive(Debug, Clone)]
pub struct ExternalDismissHandle {
    signal_sender: mpsc::Sender<TypeaheadSignal>,
}

impl ExternalDismissHandle {
    pub async fn dismiss(&self) {
        let _ = self
            .signal_sender
            .send(TypeaheadSignal::ExternalDismiss)
            .await;
    }
}

impl Typeahead {
    /// Create the controller and spawn its engine task. Returns the handle and the
    /// receiver for [`TypeaheadEvent`]s.
    pub fn new(
        provider: Arc<dyn SuggestionProvider>,
        config: TypeaheadConfig,
    ) -> (Typeahead, mpsc::Receiver<TypeaheadEvent>) {
        let (signal_sender, signal_receiver) =
            mpsc::channel::<TypeaheadSignal>(CHANNEL_CAPACITY);
        let (event_sender, event_receiver) =
            mpsc::channel::<TypeaheadEvent>(CHANNEL_CAPACITY);

        let safe_state: SafeTypeaheadState =
            Arc::new(StdMutex::new(TypeaheadState::default()));

        // Start the engine task; it runs until `signal_sender` is dropped.
        spawn_engine_task(
            config,
            provider,
            safe_state.clone(),
            event_sender,
            signal_receiver,
        );

        (
            Typeahead {
                signal_sender,
                safe_state,
            },
            event_receiver,
        )
    }

    pub async fn on_query_changed(&self, text: impl Into<String>) {
        self.send(TypeaheadSignal::QueryChanged(text.into())).await;
    }

    pub async fn on_move_up(&self) { self.send(TypeaheadSignal::MoveUp).await; }

    pub async fn on_move_down(&self) { self.send(TypeaheadSignal::MoveDown).await; }

    pub async fn on_commit(&self) { self.send(TypeaheadSignal::Commit).await; }

    pub async fn on_commit_index(&self, index: usize) {
        self.send(TypeaheadSignal::CommitIndex(index)).await;
    }

    pub async fn on_dismiss_key(&self) { self.send(TypeaheadSignal::DismissKey).await; }

    pub async fn on_blur(&self) { self.send(TypeaheadSignal::Blur).await; }

    /// Acquire a token the host can use to route outside-interaction notifications into
    /// this controller, scoped to the host's own lifecycle.
    pub fn external_dismiss_handle(&self) -> ExternalDismissHandle {
        ExternalDismissHandle {
            signal_sender: self.signal_sender.clone(),
        }
    }

    /// Immutable view for the rendering collaborator.
    pub fn render_snapshot(&self) -> RenderSnapshot {
        self.safe_state.lock().unwrap().render_snapshot()
    }

    pub fn is_open(&self) -> bool {
        self.safe_state.lock().unwrap().visibility.is_open()
    }

    /// Non-async variant of the `on_*` methods, for hosts that deliver input from a
    /// synchronous callback and cannot await.
    pub fn try_signal(&self, signal: TypeaheadSignal) -> Result<(), TypeaheadError> {
        self.signal_sender
            .try_send(signal)
            .map_err(|error| match error {
                TrySendError::Full(_) => TypeaheadError::ChannelFull,
                TrySendError::Closed(_) => TypeaheadError::EngineShutdown,
            })
    }

    async fn send(&self, signal: TypeaheadSignal) {
        // Send failure means the engine task is gone (shutdown); nothing to do.
        let _ = self.signal_sender.send(signal).await;
    }
}
