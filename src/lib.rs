//! # Attendance Poll Bot
//!
//! A Telegram bot that asks a group who is coming.
//!
//! ## Features
//! - Polls with "I'm in", "I'm out", "+1" and "-1" buttons
//! - Votes listed in the order they were cast, with mentions
//! - The same poll shared into many chats through inline mode, kept in sync
//! - A place/date/time draft to build poll text step by step
//! - Persistent storage with SQLite

/// Bot command handlers and update processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, migrations and the poll store
pub mod database;
/// Poll domain types and message rendering
pub mod poll;
/// Health endpoints
pub mod services;
/// Utility functions for dates, validation, logging and formatting
pub mod utils;
