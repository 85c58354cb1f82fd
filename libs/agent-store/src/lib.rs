// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent State Store
//!
//! Holds the current page of agents together with search, filter and
//! pagination state, and mediates every mutation. Requests go through an
//! [`AgentService`]; [`agent_client::AgentClient`] is the production
//! implementation.
//!
//! ```ignore
//! use agent_client::{AgentClient, ClientConfig};
//! use agent_store::AgentStore;
//!
//! let store = AgentStore::new(AgentClient::new(&ClientConfig::from_env())?);
//! store.set_search("sarah");
//! store.refresh().await;
//! for agent in store.snapshot().agents {
//!     println!("{} {}", agent.id, agent.name);
//! }
//! ```

mod model;
mod pagination;
mod service;
mod state;
mod status;
mod store;

pub use model::{Agent, AgentDetail, Availability, avatar_url};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
pub use service::{AgentService, ServiceError};
pub use state::{AgentState, RequestFamily, RequestState};
pub use status::{
    STATUS_ACTIVE, STATUS_BLOCK, STATUS_INACTIVE, StatusKind, active_status, next_block_status,
};
pub use store::{AgentStore, Outcome};
