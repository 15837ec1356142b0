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

/// Tags each dispatched lookup with a strictly increasing id, so that of any number of
/// concurrently outstanding lookups only the most recently dispatched one may update
/// visible state. Superseded responses are simply dropped by the caller when
/// [`Self::accept`] returns `false` (no retry, no error). This resolves lookup races by
/// id comparison instead of requiring the lookup capability to support cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchIdGenerator {
    latest_id: u64,
}

impl Default for SearchIdGenerator {
    fn default() -> Self { Self::new(0) }
}

impl SearchIdGenerator {
    /// The first id issued by [`Self::next_id`] is `seed + 1`.
    pub fn new(seed: u64) -> Self { Self { latest_id: seed } }

    /// Issue the id for a new lookup dispatch. Call this once per dispatch, not per
    /// keystroke.
    pub fn next_id(&mut self) -> u64 {
        self.latest_id += 1;
        self.latest_id
    }

    /// Returns `true` iff `response_id` belongs to the most recently dispatched lookup.
    pub fn accept(&self, response_id: u64) -> bool { response_id == self.latest_id }
}
