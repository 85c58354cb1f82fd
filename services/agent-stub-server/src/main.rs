// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub agent-management server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p agent-stub-server
//! ```
//!
//! Then point the CLI at it:
//! ```bash
//! AGENT_API_URL=http://127.0.0.1:9090 cargo run -p agent-cli -- list
//! ```

use anyhow::{Context, Result};
use dropshot::ConfigLoggingLevel;
use std::net::SocketAddr;

use agent_stub_server::{StubContext, default_fixtures_dir, start};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:9090";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "agent_stub_server=info,dropshot=info".to_string()),
        ))
        .init();

    let fixtures_dir = std::env::var("FIXTURES_DIR")
        .map(Into::into)
        .unwrap_or_else(|_| default_fixtures_dir());
    let context = StubContext::from_fixtures(&fixtures_dir)?;

    let bind_address: SocketAddr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
        .parse()
        .context("Invalid BIND_ADDRESS")?;

    let server = start(context, bind_address, ConfigLoggingLevel::Info)?;

    tracing::info!("Stub agent server listening on http://{}", server.local_addr());
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /agent/");
    tracing::info!("  POST /agent/detail/page");
    tracing::info!("  POST /tickets/agent/");
    tracing::info!("  PUT  /agent/status");
    tracing::info!("  POST /agent/delete");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
