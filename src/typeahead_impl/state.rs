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

use crate::{SearchIdGenerator, SelectionCursor, Visibility};

/// All mutable typeahead state, owned exclusively by one controller instance and guarded
/// by a single mutex (see [`crate::SafeTypeaheadState`]) so the option list, raw result
/// list, cursor, and visibility always change together. No intermediate state is
/// observable where one reflects a new result set and another an old one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeaheadState {
    /// The raw text currently in the host input field. Read-only to the core; mutated
    /// only by incoming [`crate::TypeaheadSignal::QueryChanged`] signals.
    pub query: String,

    /// Raw results exactly as the provider returned them. Commit payloads come from
    /// here, untransformed.
    pub results: Vec<String>,

    /// One derived option per raw result, same order.
    pub options: Vec<SuggestionOption>,

    pub cursor: SelectionCursor,
    pub visibility: Visibility,
    pub search_id: SearchIdGenerator,
}

impl TypeaheadState {
    /// Close and drop the current result set. Used when the query empties out or an
    /// accepted response carries zero results.
    pub fn close_and_clear(&mut self) {
        self.visibility.close();
        self.results.clear();
        self.options.clear();
        self.cursor.reset();
    }

    /// Atomically install a fresh result set: replace results and options, drop the
    /// selection (no default selection on new results), and open.
    pub fn install_results(&mut self, results: Vec<String>, options: Vec<SuggestionOption>) {
        self.results = results;
        self.options = options;
        self.cursor.reset();
        self.visibility.open();
    }

    /// The raw result the cursor currently points at, if the selection is in bounds.
    pub fn get_selected_result(&self) -> Option<&String> {
        self.cursor
            .maybe_index
            .and_then(|index| self.results.get(index))
    }

    /// Immutable view for the rendering collaborator. Per-row `selected` flags are
    /// computed here by index comparison; the cursor index remains the single source of
    /// selection truth.
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            open: self.visibility.is_open(),
            options: self
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| OptionView {
                    prefix: option.prefix.clone(),
                    completion: option.completion.clone(),
                    selected: self.cursor.maybe_index == Some(index),
                })
                .collect(),
        }
    }
}

/// The stored form of one suggestion: the typed prefix and the completion the provider
/// suggests after it. A non-prefix result is stored with an empty prefix and the whole
/// string as the completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionOption {
    pub prefix: String,
    pub completion: String,
}

impl SuggestionOption {
    /// The fallback form: no styled prefix, the whole string as completion.
    pub fn plain(raw_result: &str) -> Self {
        Self {
            prefix: String::new(),
            completion: raw_result.to_string(),
        }
    }
}

/// What the UI collaborator renders: the open flag and the ordered option list with
/// derived `selected` flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderSnapshot {
    pub open: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionView {
    pub prefix: String,
    pub completion: String,
    pub selected: bool,
}
