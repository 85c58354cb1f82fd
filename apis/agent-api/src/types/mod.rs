// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Agent-management type definitions

pub mod agent;
pub mod common;
pub mod requests;
pub mod ticket;

pub use agent::*;
pub use common::*;
pub use requests::*;
pub use ticket::*;
