// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the Vulnpix server.

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = vulnpix_server::cli::Cli::parse();
    vulnpix_server::logging::init_logging();
    vulnpix_server::run(cli).await
}
