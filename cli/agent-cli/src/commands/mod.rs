// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

mod agents;
mod form;

pub use agents::{AgentArgs, DeleteArgs, ListArgs, TicketsArgs, get, set_active, toggle_block};
pub use form::NewAgentArgs;

use anyhow::Result;

use agent_store::Outcome;

/// Turn a store outcome into a command result.
///
/// Commands issue one request per family, so a stale outcome is reported
/// as an error.
pub(crate) fn settle(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Stale => anyhow::bail!("Response was superseded by a newer request"),
        Outcome::Failed(e) => Err(e.into()),
    }
}
