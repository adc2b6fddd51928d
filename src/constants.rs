//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_BED_CREATED: &str = "✅ Garden bed created";
pub const SUCCESS_BED_DELETED: &str = "✅ Garden bed deleted";
pub const SUCCESS_PLANT_CREATED: &str = "✅ Plant added";
pub const SUCCESS_PLANT_DELETED: &str = "✅ Plant removed";
pub const SUCCESS_STATUS_ADVANCED: &str = "✅ Plant status updated";
pub const SUCCESS_HARVEST_RECORDED: &str = "✅ Harvest recorded";

/// Fallback text shown when a reported error carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;

// Toast Constants
/// Width of a toast notification in columns
pub const TOAST_WIDTH: u16 = 40;
/// Height of a single toast notification in rows
pub const TOAST_HEIGHT: u16 = 3;
/// Default time a toast stays on screen before auto-dismissing
pub const TOAST_DEFAULT_TTL_SECS: u64 = 4;

/// Application tick cadence for the event loop
pub const TICK_INTERVAL_MS: u64 = 100;
