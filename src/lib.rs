// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config + runtime wiring
pub mod errors;        // error handling
pub mod observability; // log sink + structured messages
pub mod processors;    // processor variants + factory
pub mod scratch;       // transient scratch storage
pub mod traits;        // unified abstractions
