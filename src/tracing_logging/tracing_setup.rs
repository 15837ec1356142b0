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

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::{DisplayPreference, TracingConfig, WriterConfig};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Simply initialize the tracing system with the provided [TracingConfig].
pub fn init_tracing(tracing_config: TracingConfig) -> miette::Result<()> {
    try_create_layers(tracing_config)
        .map(|layers| tracing_subscriber::registry().with(layers).init())
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter of their own.
    layers.push(Box::new(level_filter));

    // Shared fmt configuration regardless of where the events are displayed.
    macro_rules! create_fmt {
        () => {
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_thread_ids(true)
                .with_thread_names(false)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true)
        };
    }

    match tracing_config.writer_config {
        WriterConfig::None => {}
        WriterConfig::Display(DisplayPreference::Stdout) => {
            layers.push(Box::new(
                create_fmt!()
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            ));
        }
        WriterConfig::Display(DisplayPreference::Stderr) => {
            layers.push(Box::new(
                create_fmt!()
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            ));
        }
    }

    Ok(layers)
}
