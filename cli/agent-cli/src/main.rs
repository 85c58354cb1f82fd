// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! agentctl - administer support agents from the command line

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use agent_client::{AgentClient, ClientConfig};
use agent_store::AgentStore;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "agentctl", version, about = "Support agent administration")]
struct Cli {
    /// Base URL of the agent-management API
    #[arg(short = 'U', long, global = true, env = "AGENT_API_URL")]
    url: Option<String>,

    /// Application the agents belong to
    #[arg(short, long, global = true, env = "AGENT_APP_ID")]
    app_id: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, env = "AGENT_API_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Enable verbose/debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List agents
    #[command(alias = "ls")]
    List(commands::ListArgs),

    /// Show agent details
    Get(commands::AgentArgs),

    /// List tickets assigned to an agent
    Tickets(commands::TicketsArgs),

    /// Set an agent's status to active
    Activate(commands::AgentArgs),

    /// Set an agent's status to inactive
    Deactivate(commands::AgentArgs),

    /// Block an agent, or unblock one that is already blocked
    Block(commands::AgentArgs),

    /// Delete an agent
    #[command(alias = "rm")]
    Delete(commands::DeleteArgs),

    /// Validate a new agent without submitting it
    ValidateNew(commands::NewAgentArgs),
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.url {
            config = config.with_base_url(url);
        }
        if let Some(app_id) = &self.app_id {
            config = config.with_app_id(app_id);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("agent_cli=debug,agent_store=debug,agent_client=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("agent_cli=warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let json = cli.json;
    let config = cli.client_config();

    // Form validation is local; everything else talks to the backend
    let command = match cli.command {
        Commands::ValidateNew(args) => return args.run(json),
        command => command,
    };

    tracing::debug!(base_url = %config.base_url, app_id = %config.app_id, "using backend");
    let store = AgentStore::new(AgentClient::new(&config)?);

    match command {
        Commands::List(args) => args.run(&store, json).await,
        Commands::Get(args) => commands::get(&store, &args, json).await,
        Commands::Tickets(args) => args.run(&store, json).await,
        Commands::Activate(args) => commands::set_active(&store, &args, true, json).await,
        Commands::Deactivate(args) => commands::set_active(&store, &args, false, json).await,
        Commands::Block(args) => commands::toggle_block(&store, &args, json).await,
        Commands::Delete(args) => args.run(&store, json).await,
        Commands::ValidateNew(args) => args.run(json),
    }
}
