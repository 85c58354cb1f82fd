// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! New agent form validation

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use agent_api::{FormError, NewAgentForm};

use crate::output::json;

#[derive(Args, Clone, Default)]
pub struct NewAgentArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// One of: Agent, Senior Agent, Team Lead, Manager, Supervisor
    #[arg(long, default_value = "")]
    pub role: String,

    #[arg(long, default_value = "")]
    pub team: String,

    #[arg(long, default_value = "")]
    pub department: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "Active")]
    pub status: String,

    /// First working day (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Area of expertise (repeatable; repeating a value removes it again)
    #[arg(long)]
    pub expertise: Vec<String>,
}

impl NewAgentArgs {
    pub fn to_form(&self) -> NewAgentForm {
        let mut form = NewAgentForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role: self.role.clone(),
            team: self.team.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            status: self.status.clone(),
            start_date: self
                .start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            expertise: Vec::new(),
        };
        for skill in &self.expertise {
            form.toggle_expertise(skill);
        }
        form
    }

    pub fn run(&self, use_json: bool) -> Result<()> {
        let form = self.to_form();
        let errors = form.validate().err().unwrap_or_default();

        if use_json {
            json::print_json(&json!({
                "valid": errors.is_empty(),
                "form": form,
                "errors": errors.iter().map(describe).collect::<Vec<_>>(),
            }))?;
        } else if errors.is_empty() {
            println!("Agent form for {} is valid", form.name);
        } else {
            for error in &errors {
                eprintln!("  {}: {}", error.field(), error);
            }
        }

        if !errors.is_empty() {
            anyhow::bail!("{} field(s) failed validation", errors.len());
        }
        Ok(())
    }
}

fn describe(error: &FormError) -> serde_json::Value {
    json!({
        "field": error.field().to_string(),
        "message": error.to_string(),
    })
}
