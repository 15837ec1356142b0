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

use std::time::Duration;

use tokio::time::Instant;

/// Coalesces rapid-fire query changes into at most one pending dispatch. Each
/// [`Self::schedule`] call replaces the previous pending dispatch outright (it never
/// fires) and restarts the countdown with the latest query text.
///
/// This holds only the pending state; the engine's `tokio::select!` loop supplies the
/// timer by sleeping until [`Self::deadline`] and then calling [`Self::fire`]. With a
/// zero delay the dispatch still goes through that timer branch, never synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    maybe_pending: Option<PendingDispatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDispatch {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            maybe_pending: None,
        }
    }

    /// Record the latest query text and (re)start the countdown from `now`.
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.maybe_pending = Some(PendingDispatch {
            query,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending dispatch, if any. Cancellation has no observable effect beyond
    /// the dispatch not firing.
    pub fn cancel(&mut self) { self.maybe_pending = None; }

    /// The instant at which the pending dispatch is due, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.maybe_pending
            .as_ref()
            .map(|pending| pending.deadline)
    }

    /// Take the latest query text, disarming the countdown. The engine calls this
    /// exactly once per elapsed countdown.
    pub fn fire(&mut self) -> Option<String> {
        self.maybe_pending.take().map(|pending| pending.query)
    }
}
