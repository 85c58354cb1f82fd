// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Create-agent form
//!
//! The backend has no create endpoint yet, so a new agent is only checked
//! locally. The role, team and department lists mirror what the admin
//! screen offers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const ROLES: &[&str] = &["Agent", "Senior Agent", "Team Lead", "Manager", "Supervisor"];

pub const TEAMS: &[&str] = &[
    "Support Team A",
    "Support Team B",
    "Technical Support",
    "Sales Support",
    "Customer Success",
];

pub const DEPARTMENTS: &[&str] = &["Customer Service", "Technical", "Sales", "Billing", "Operations"];

pub const EXPERTISE: &[&str] = &[
    "Technical Support",
    "Billing",
    "Account Management",
    "Product Knowledge",
    "Customer Relations",
];

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Fields of the create-agent form that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Role,
    Team,
    Department,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Role => "Role",
            Self::Team => "Team",
            Self::Department => "Department",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FormField),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail(_) => FormField::Email,
        }
    }
}

/// A new agent as entered by an administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAgentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub team: String,
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub expertise: Vec<String>,
}

fn default_status() -> String {
    "Active".to_string()
}

impl Default for NewAgentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: String::new(),
            team: String::new(),
            department: String::new(),
            location: String::new(),
            status: default_status(),
            start_date: String::new(),
            expertise: Vec::new(),
        }
    }
}

impl NewAgentForm {
    /// Check every required field, reporting all failures at once.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Name));
        }
        if self.email.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Email));
        } else if !is_valid_email(&self.email) {
            errors.push(FormError::InvalidEmail(self.email.clone()));
        }
        if self.phone.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Phone));
        }
        if self.role.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Role));
        }
        if self.team.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Team));
        }
        if self.department.trim().is_empty() {
            errors.push(FormError::Missing(FormField::Department));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Add or remove an expertise tag.
    pub fn toggle_expertise(&mut self, skill: &str) {
        if let Some(pos) = self.expertise.iter().position(|s| s == skill) {
            self.expertise.remove(pos);
        } else {
            self.expertise.push(skill.to_string());
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}
