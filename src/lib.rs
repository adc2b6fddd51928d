//! Gardenist - A Terminal User Interface (TUI) garden manager
//!
//! This library provides a complete terminal-based interface for managing
//! garden beds, the plants growing in them, and the harvests taken from
//! those plants. Data is persisted in a local SQLite database and the
//! interactive UI is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`garden`] - Domain types and the garden service layer
//! * [`storage`] - Local database and data persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Domain types, validation, and the garden service layer
pub mod garden;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup for debugging and error tracking
pub mod logger;

/// Error reporting: diagnostic logging plus user-visible notifications
pub mod notify;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer for garden data
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export entity models for convenient access
pub use entities::{bed, harvest, plant, plant_image};
