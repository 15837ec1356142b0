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

use unicode_segmentation::UnicodeSegmentation;

use crate::SuggestionOption;

/// Split `raw_result` into a `(prefix, completion)` pair by matching `query` as a
/// case-insensitive prefix, anchored at the start of the string.
///
/// 1. If `raw_result` starts with `query` (ignoring case), the returned option carries
///    `query` as the prefix, and whatever follows the match as the completion.
/// 2. If it does not (the provider returned a non-prefix or reordered result), the whole
///    string becomes the completion with an empty prefix, so it renders unstyled instead
///    of erroring.
///
/// The match walks grapheme clusters, so the split never lands inside a cluster. Pure
/// function, no state.
pub fn split_anchored_prefix(query: &str, raw_result: &str) -> SuggestionOption {
    if query.is_empty() {
        return SuggestionOption::plain(raw_result);
    }

    let mut match_end_byte_index = 0;
    let mut result_graphemes = raw_result.graphemes(true);

    for query_grapheme in query.graphemes(true) {
        match result_graphemes.next() {
            Some(result_grapheme)
                if grapheme_eq_ignore_case(result_grapheme, query_grapheme) =>
            {
                match_end_byte_index += result_grapheme.len();
            }
            // Mismatch, or raw_result is shorter than query.
            _ => return SuggestionOption::plain(raw_result),
        }
    }

    SuggestionOption {
        prefix: query.to_string(),
        completion: raw_result[match_end_byte_index..].to_string(),
    }
}

fn grapheme_eq_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs == rhs || lhs.to_lowercase() == rhs.to_lowercase()
}
