//! Integration tests for Layer 1: Storage
//!
//! Tests for the table registry and the client registry with its waiting queue.

mod clients;
mod tables;
