// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod context;
pub mod factory;
pub mod file;
pub mod text;


pub use context::*;
pub use factory::*;
pub use file::*;
pub use text::*;
