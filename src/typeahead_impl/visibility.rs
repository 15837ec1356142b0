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

/// Whether the suggestion list is presented. Starts [`Visibility::Closed`]. The engine
/// opens it only when an accepted lookup response installs a non-empty option list, so
/// it is never open while the option list is empty.
///
/// Loss of input focus does not close this directly; the engine arms a grace-delay
/// deadline first, so a pointer-driven commit can still land (see
/// [`crate::TypeaheadConfig::blur_grace_delay`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn open(&mut self) { *self = Visibility::Open; }

    pub fn close(&mut self) { *self = Visibility::Closed; }

    pub fn is_open(&self) -> bool { matches!(self, Visibility::Open) }
}
