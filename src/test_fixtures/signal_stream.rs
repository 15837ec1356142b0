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

use async_stream::stream;

use crate::{PinnedSignalStream, TypeaheadSignal};

/// Turn a `Vec` of signals into a pinned stream, for driving
/// [`crate::spawn_signal_pump`] in tests.
pub fn gen_signal_stream(generator_vec: Vec<TypeaheadSignal>) -> PinnedSignalStream {
    let it = stream! {
        for signal in generator_vec {
            yield signal;
        }
    };
    Box::pin(it)
}

/// Like [`gen_signal_stream`], with a fixed delay before each item, to mimic typing
/// cadence.
pub fn gen_signal_stream_with_delay(
    generator_vec: Vec<TypeaheadSignal>,
    delay: Duration,
) -> PinnedSignalStream {
    let it = stream! {
        for signal in generator_vec {
            tokio::time::sleep(delay).await;
            yield signal;
        }
    };
    Box::pin(it)
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_gen_signal_stream() {
        let mut signal_stream = gen_signal_stream(vec![
            TypeaheadSignal::QueryChanged("c".to_string()),
            TypeaheadSignal::MoveDown,
            TypeaheadSignal::Commit,
        ]);
        for _ in 1..=3 {
            signal_stream.next().await;
        }
        assert_eq!(signal_stream.next().await, None);
    }

    #[tokio::test]
    async fn test_gen_signal_stream_with_delay() {
        const DELAY: u64 = 50;

        // Start timer.
        let start_time = std::time::Instant::now();

        let mut signal_stream = gen_signal_stream_with_delay(
            vec![TypeaheadSignal::MoveDown, TypeaheadSignal::MoveUp],
            Duration::from_millis(DELAY),
        );
        for _ in 1..=2 {
            signal_stream.next().await;
        }

        // End timer.
        let end_time = std::time::Instant::now();

        assert_eq!(signal_stream.next().await, None);
        assert!(end_time - start_time >= Duration::from_millis(DELAY * 2));
    }
}
