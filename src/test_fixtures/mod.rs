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

//! Reusable mock [`SuggestionProvider`]s and signal-stream generators, so the engine and
//! the public API can be tested end to end with dependency injection, the same approach
//! the rest of this crate's tests take for input streams.

// Attach sources.
pub mod mock_provider;
pub mod signal_stream;

// Re-export.
pub use mock_provider::*;
pub use signal_stream::*;
