//! Integration tests for Layer 0: Foundation
//!
//! Tests for clock times, client names, table numbers, and club configuration.

mod config;
mod time;
