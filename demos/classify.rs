// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Classify this program's own command line and print the report.
///
/// Try:
///
/// ```bash
/// $ cargo run --example classify -- -la --color file.txt -v --color
/// $ ARGCLASS_PREFIX=+ cargo run --example classify -- +x ++y -z
/// $ RUST_LOG=argclass=trace cargo run --example classify -- -ab -ba
/// ```
use std::env;

use argclass::{Aggregate, Result};

const PREFIX_ENV_VAR: &str = "ARGCLASS_PREFIX";
const DEFAULT_PREFIX: &str = "-";

fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let prefix = env::var(PREFIX_ENV_VAR).unwrap_or_else(|_| DEFAULT_PREFIX.into());

    let aggregate = Aggregate::from_env(&prefix)?;

    print!("{}", aggregate);

    Ok(())
}
