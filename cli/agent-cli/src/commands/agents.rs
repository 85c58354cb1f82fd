// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent commands

use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use serde_json::json;

use agent_api::{AgentKey, AgentTicketsRequest, SortOrder};
use agent_store::{AgentService, AgentStore};

use super::settle;
use crate::output::{format_timestamp, json, table};

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Match against name or email
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only show agents with this account status (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Agents per page
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Sort by name, asc or desc
    #[arg(long, default_value = "asc")]
    pub sort: SortOrder,
}

#[derive(Args, Clone)]
pub struct AgentArgs {
    /// Agent ID
    pub id: String,
}

#[derive(Args, Clone)]
pub struct TicketsArgs {
    /// Agent ID
    pub id: String,

    /// Match against ticket titles
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only show tickets with this priority (repeatable)
    #[arg(long)]
    pub priority: Vec<String>,

    #[arg(long, default_value = "1")]
    pub page: u32,

    #[arg(long, default_value = "10")]
    pub limit: u32,
}

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Agent ID
    pub id: String,

    /// Skip confirmation
    #[arg(long, short)]
    pub force: bool,
}

impl ListArgs {
    pub async fn run<S: AgentService>(&self, store: &AgentStore<S>, use_json: bool) -> Result<()> {
        if let Some(search) = &self.search {
            store.set_search(search.as_str());
        }
        store.set_status_filter(self.statuses.clone());
        // Both of the above reset the page, so it goes last
        store.set_limit(self.limit);
        store.set_page(self.page);

        let mut request = store.list_request();
        request.sort_order = self.sort;
        settle(store.fetch_agents(request).await)?;

        let state = store.snapshot();
        if use_json {
            return json::print_json(&json!({
                "agents": state.agents,
                "pagination": state.pagination,
            }));
        }

        let mut tbl = table::create_table(&[
            "ID", "NAME", "EMAIL", "ROLE", "TEAM", "STATUS", "TICKETS", "AVG RESPONSE", "SCORE",
        ]);
        for agent in &state.agents {
            tbl.add_row(vec![
                agent.id.clone(),
                agent.name.clone(),
                agent.email.clone(),
                agent.role.clone(),
                agent.team.clone(),
                agent.account_status.clone(),
                agent.tickets_closed.to_string(),
                agent.avg_response_time.clone(),
                agent.performance_score.to_string(),
            ]);
        }
        table::print_table(tbl);

        let pagination = state.pagination;
        match pagination.item_range(state.agents.len()) {
            Some((first, last)) => println!(
                "\nShowing {}-{} of {} agents (page {} of {})",
                first,
                last,
                pagination.total,
                pagination.page,
                pagination.last_page()
            ),
            None => println!("\nNo agents found"),
        }
        Ok(())
    }
}

pub async fn get<S: AgentService>(
    store: &AgentStore<S>,
    args: &AgentArgs,
    use_json: bool,
) -> Result<()> {
    settle(store.fetch_agent_detail(&AgentKey::parse(&args.id)).await)?;
    let detail = store
        .snapshot()
        .detail
        .ok_or_else(|| anyhow::anyhow!("Agent {} not found", args.id))?;

    if use_json {
        return json::print_json(&detail);
    }

    table::print_fields(&[
        ("ID", detail.id.clone()),
        ("Name", detail.name.clone()),
        ("Email", detail.email.clone()),
        ("Phone", detail.phone.clone()),
        ("Location", detail.location.clone()),
        ("Role", detail.role.clone()),
        ("Team", detail.team.clone()),
        ("Status", detail.account_status.clone()),
        ("Rating", detail.agent_rating.clone()),
        ("Tickets", detail.tickets_closed.to_string()),
        ("Avg response", detail.avg_response_time.clone()),
        ("Score", detail.performance_score.to_string()),
        (
            "Last active",
            detail
                .last_active
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]);
    Ok(())
}

impl TicketsArgs {
    pub async fn run<S: AgentService>(&self, store: &AgentStore<S>, use_json: bool) -> Result<()> {
        let mut request =
            AgentTicketsRequest::new(AgentKey::parse(&self.id), store.service().app_id());
        request.search = self.search.clone().unwrap_or_default();
        request.priority = self.priority.clone();
        request.page = self.page.max(1);
        request.limit = self.limit;
        settle(store.fetch_agent_tickets(request).await)?;

        let state = store.snapshot();
        if use_json {
            return json::print_json(&json!({
                "tickets": state.tickets,
                "total": state.tickets_total,
            }));
        }

        let mut tbl = table::create_table(&["ID", "TITLE", "STATUS", "PRIORITY", "CREATED"]);
        for ticket in &state.tickets {
            tbl.add_row(vec![
                ticket.ticket_id.to_string(),
                ticket.title.clone(),
                ticket.status.clone().unwrap_or_else(|| "-".to_string()),
                ticket.priority.clone().unwrap_or_else(|| "-".to_string()),
                ticket
                    .created_at
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table::print_table(tbl);
        println!("\n{} of {} tickets", state.tickets.len(), state.tickets_total);
        Ok(())
    }
}

pub async fn set_active<S: AgentService>(
    store: &AgentStore<S>,
    args: &AgentArgs,
    active: bool,
    use_json: bool,
) -> Result<()> {
    settle(store.set_agent_active(&args.id, active).await)?;
    print_status(&args.id, agent_store::active_status(active), use_json)
}

pub async fn toggle_block<S: AgentService>(
    store: &AgentStore<S>,
    args: &AgentArgs,
    use_json: bool,
) -> Result<()> {
    // The toggle needs the current status
    settle(store.fetch_agent_detail(&AgentKey::parse(&args.id)).await)?;
    settle(store.toggle_block(&args.id).await)?;

    let status = store
        .snapshot()
        .detail
        .map(|d| d.account_status)
        .unwrap_or_default();
    print_status(&args.id, &status, use_json)
}

fn print_status(id: &str, status: &str, use_json: bool) -> Result<()> {
    if use_json {
        json::print_json(&json!({ "id": id, "account_status": status }))
    } else {
        println!("Agent {} is now {}", id, status);
        Ok(())
    }
}

impl DeleteArgs {
    pub async fn run<S: AgentService>(&self, store: &AgentStore<S>, use_json: bool) -> Result<()> {
        if !self.force
            && !Confirm::new()
                .with_prompt(format!("Delete agent {}?", self.id))
                .default(false)
                .interact()?
        {
            println!("Aborted.");
            return Ok(());
        }

        settle(store.delete_agent(&self.id).await)?;

        if use_json {
            json::print_json(&json!({ "id": self.id, "deleted": true }))
        } else {
            println!("Deleted agent {}", self.id);
            Ok(())
        }
    }
}
