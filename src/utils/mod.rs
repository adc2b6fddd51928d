//! Utility modules for the Gardenist application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date/time handling and other cross-cutting concerns.

pub mod datetime;
