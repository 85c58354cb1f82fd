// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the agent-management API

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Application id the backend scopes agents to when the caller gives none.
pub const DEFAULT_APP_ID: &str = "fastapi-6222d6";

/// Backend identifier for an agent.
///
/// The backend keys agents numerically but some payloads echo the key back
/// as a string, so both forms are accepted. [`fmt::Display`] yields the
/// canonical string form used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AgentKey {
    Numeric(u64),
    Text(String),
}

impl AgentKey {
    /// Parse user input, preferring the numeric form when it fits.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    /// Numeric value of the key, if it has one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True when both keys render to the same canonical string.
    pub fn same_as(&self, other: &AgentKey) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for AgentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for AgentKey {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for AgentKey {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Sort direction accepted by the listing endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("invalid sort order: {} (expected asc or desc)", other)),
        }
    }
}

/// Deserialize a metric that may arrive as a number, a numeric string, or null.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Number(n)) => Some(n),
        Some(Lenient::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Deserialize a field whose value may be `null`, treating `null` like a
/// missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
