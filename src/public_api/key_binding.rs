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

//! The host boundary: key codes are mapped to [`TypeaheadSignal`]s exactly once, here.
//! The rest of the crate never sees a key event. Query text changes are not produced
//! here; the host owns the text field and translates its value changes into
//! [`TypeaheadSignal::QueryChanged`] itself.

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::{PinnedEventStream, PinnedSignalStream, TypeaheadSignal};

/// Map one crossterm event to a typeahead signal, if it is one of the navigation keys
/// this controller cares about. Everything else (character input, etc.) belongs to the
/// host's text field.
pub fn try_map_key_event(event: &Event) -> Option<TypeaheadSignal> {
    let Event::Key(key_event) = event else {
        return None;
    };
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match key_event.code {
        KeyCode::Up => Some(TypeaheadSignal::MoveUp),
        KeyCode::Down => Some(TypeaheadSignal::MoveDown),
        KeyCode::Enter => Some(TypeaheadSignal::Commit),
        KeyCode::Esc => Some(TypeaheadSignal::DismissKey),
        _ => None,
    }
}

/// Adapt a pinned crossterm event stream (typically
/// [`crossterm::event::EventStream`](https://docs.rs/crossterm/latest/crossterm/event/struct.EventStream.html),
/// or a test-generated stream) into a stream of typeahead signals. Read errors and
/// unmapped events are skipped.
pub fn typeahead_signal_stream(
    mut pinned_event_stream: PinnedEventStream,
) -> PinnedSignalStream {
    let it = stream! {
        while let Some(result_crossterm_event) = pinned_event_stream.next().await {
            if let Ok(crossterm_event) = result_crossterm_event {
                if let Some(signal) = try_map_key_event(&crossterm_event) {
                    yield signal;
                }
            }
        }
    };
    Box::pin(it)
}

/// Forward every signal from `signal_stream` into the given sender (clone it from
/// [`crate::Typeahead::signal_sender`]). The task ends when the stream ends or the
/// controller shuts down.
pub fn spawn_signal_pump(
    signal_sender: mpsc::Sender<TypeaheadSignal>,
    mut signal_stream: PinnedSignalStream,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(signal) = signal_stream.next().await {
            if signal_sender.send(signal).await.is_err() {
                // Controller is gone. Initiate shutdown.
                break;
            }
        }
    })
}
