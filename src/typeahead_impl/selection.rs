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

/// Circular keyboard cursor over the current suggestion list. `None` means nothing is
/// selected (a fresh result set always installs with no selection). This index is the
/// single source of selection truth; rendering code derives per-row `selected` flags by
/// comparing against it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    pub maybe_index: Option<usize>,
}

impl SelectionCursor {
    /// Move one step down, wrapping from the last option to the first. From the
    /// unselected state this lands on index `0`. No-op on an empty list. Returns the new
    /// index so the caller can ask the UI collaborator to scroll it into view.
    pub fn move_down(&mut self, option_count: usize) -> Option<usize> {
        if option_count == 0 {
            return None;
        }
        let new_index = match self.maybe_index {
            None => 0,
            Some(index) => (index + 1) % option_count,
        };
        self.maybe_index = Some(new_index);
        Some(new_index)
    }

    /// Move one step up, wrapping from the first option to the last. From the unselected
    /// state this lands on the last index. No-op on an empty list.
    pub fn move_up(&mut self, option_count: usize) -> Option<usize> {
        if option_count == 0 {
            return None;
        }
        let new_index = match self.maybe_index {
            None | Some(0) => option_count - 1,
            Some(index) => index - 1,
        };
        self.maybe_index = Some(new_index);
        Some(new_index)
    }

    /// Back to the unselected state. Invoked whenever the option list is replaced.
    pub fn reset(&mut self) { self.maybe_index = None; }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_move_down_from_unselected_lands_on_first() {
        let mut cursor = SelectionCursor::default();
        assert_eq!(cursor.move_down(3), Some(0));
        assert_eq!(cursor.maybe_index, Some(0));
    }

    #[test]
    fn test_move_up_from_unselected_lands_on_last() {
        let mut cursor = SelectionCursor::default();
        assert_eq!(cursor.move_up(3), Some(2));
        assert_eq!(cursor.maybe_index, Some(2));
    }

    #[test]
    fn test_move_down_n_times_returns_to_start() {
        const OPTION_COUNT: usize = 5;
        let mut cursor = SelectionCursor::default();
        cursor.move_down(OPTION_COUNT);
        let start_index = cursor.maybe_index;

        for _ in 0..OPTION_COUNT {
            cursor.move_down(OPTION_COUNT);
        }

        assert_eq!(cursor.maybe_index, start_index);
    }

    #[test]
    fn test_move_up_wraps_at_first() {
        let mut cursor = SelectionCursor {
            maybe_index: Some(0),
        };
        assert_eq!(cursor.move_up(4), Some(3));
    }

    #[test]
    fn test_moves_on_empty_list_are_noop() {
        let mut cursor = SelectionCursor::default();
        assert_eq!(cursor.move_down(0), None);
        assert_eq!(cursor.move_up(0), None);
        assert_eq!(cursor.maybe_index, None);
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut cursor = SelectionCursor {
            maybe_index: Some(2),
        };
        cursor.reset();
        assert_eq!(cursor.maybe_index, None);
    }
}
