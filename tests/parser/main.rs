//! Integration tests for Layer 3: Parser
//!
//! Tests for header validation, event scanning, and error line reporting.

mod header;
