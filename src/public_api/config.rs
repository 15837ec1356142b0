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

use crate::{DEFAULT_BLUR_GRACE_DELAY, DEFAULT_DELAY};

/// Timing knobs for one [`crate::Typeahead`] instance.
///
/// Fields:
/// - `delay`: the debounce quiet period; a lookup is dispatched only after this much
///   silence following the last query change.
/// - `blur_grace_delay`: how long to defer closing after the input loses focus, so a
///   pointer-driven selection can still land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadConfig {
    pub delay: Duration,
    pub blur_grace_delay: Duration,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            blur_grace_delay: DEFAULT_BLUR_GRACE_DELAY,
        }
    }
}

impl TypeaheadConfig {
    pub fn new(delay: Duration, blur_grace_delay: Duration) -> Self {
        Self {
            delay,
            blur_grace_delay,
        }
    }
}
