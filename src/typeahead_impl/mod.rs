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

// Attach sources.
pub mod debouncer;
pub mod engine;
pub mod matcher;
pub mod provider;
pub mod search_id;
pub mod selection;
pub mod state;
pub mod visibility;

// Re-export.
pub use debouncer::*;
pub use engine::*;
pub use matcher::*;
pub use provider::*;
pub use search_id::*;
pub use selection::*;
pub use state::*;
pub use visibility::*;
