// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for agent-client

use thiserror::Error;

/// Errors that can occur while constructing a client.
///
/// Request outcomes are never reported through this type; see
/// [`crate::ApiResponse`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL could not be parsed
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
