// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Vulnpix server.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! ```bash
//! # Default: info for vulnpix crates, warn for dependencies
//! cargo run
//!
//! # Request-level tracing from tower-http
//! RUST_LOG=tower_http=debug,vulnpix=debug cargo run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` overrides the default filter when set.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,vulnpix_core=info,vulnpix_server=info"))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
