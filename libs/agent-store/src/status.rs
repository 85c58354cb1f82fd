// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account status classification
//!
//! The backend stores account status as free text with no guaranteed case.
//! Records keep the value as returned; comparisons go through
//! [`StatusKind::classify`].

use serde::Serialize;
use std::fmt;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_BLOCK: &str = "block";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Active,
    Inactive,
    /// `block` or `blocked`
    Blocked,
    Other,
}

impl StatusKind {
    pub fn classify(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "block" | "blocked" => Self::Blocked,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Blocked => "Blocked",
            Self::Other => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Status to send when toggling block on an agent currently in `current`.
///
/// Unblocking returns the agent to inactive rather than active.
pub fn next_block_status(current: &str) -> &'static str {
    match StatusKind::classify(current) {
        StatusKind::Blocked => STATUS_INACTIVE,
        _ => STATUS_BLOCK,
    }
}

pub fn active_status(active: bool) -> &'static str {
    if active { STATUS_ACTIVE } else { STATUS_INACTIVE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(StatusKind::classify("Active"), StatusKind::Active);
        assert_eq!(StatusKind::classify(" INACTIVE "), StatusKind::Inactive);
        assert_eq!(StatusKind::classify("Blocked"), StatusKind::Blocked);
        assert_eq!(StatusKind::classify("block"), StatusKind::Blocked);
        assert_eq!(StatusKind::classify("on-leave"), StatusKind::Other);
        assert_eq!(StatusKind::classify(""), StatusKind::Other);
    }

    #[test]
    fn test_block_toggle() {
        assert_eq!(next_block_status("Active"), "block");
        assert_eq!(next_block_status("inactive"), "block");
        assert_eq!(next_block_status("BLOCKED"), "inactive");
        assert_eq!(next_block_status("block"), "inactive");
    }

    #[test]
    fn test_active_status() {
        assert_eq!(active_status(true), "active");
        assert_eq!(active_status(false), "inactive");
    }
}
