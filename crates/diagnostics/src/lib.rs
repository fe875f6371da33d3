// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging setup shared by the nebula crates.
//!
//! Usage:
//! - Set NEBULA_LOG=off (default) - no logs
//! - Set NEBULA_LOG=warn - storage fallbacks and persistence failures
//! - Set NEBULA_LOG=info - session setup, resets
//! - Set NEBULA_LOG=debug - every dispatched command and filesystem mutation

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`]
pub const LOG_ENV: &str = "NEBULA_LOG";

static INIT: Once = Once::new();

/// Parsed value of the `NEBULA_LOG` variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSetting {
    Off,
    Min(emit::Level),
    /// Unrecognised value, logged at info
    Unknown,
}

impl LogSetting {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => LogSetting::Off,
            "debug" => LogSetting::Min(emit::Level::Debug),
            "info" => LogSetting::Min(emit::Level::Info),
            "warn" => LogSetting::Min(emit::Level::Warn),
            "error" => LogSetting::Min(emit::Level::Error),
            _ => LogSetting::Unknown,
        }
    }
}

/// Initialize diagnostics based on the NEBULA_LOG environment variable
///
/// Call once at startup. Subsequent calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_else(|_| "off".to_string());

        let level = match LogSetting::parse(&raw) {
            LogSetting::Off => return,
            LogSetting::Min(level) => level,
            LogSetting::Unknown => {
                // Bootstrap warning, emitted before the runtime exists
                eprintln!("Warning: Unknown {} value '{}', using 'info'", LOG_ENV, raw);
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log basic operations (session setup, resets, storage selection)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (dispatched commands, tree mutations)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable problems (storage fallbacks, unreadable snapshots)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop normal operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
