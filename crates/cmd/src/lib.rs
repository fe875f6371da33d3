// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod commands;
pub mod config;
pub mod history;
pub mod shell;

pub use config::{ShellConfig, StoreChoice};
pub use history::History;
pub use shell::{BANNER, Outcome, Shell};
