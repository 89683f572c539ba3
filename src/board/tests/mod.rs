//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `edge_cases.rs` - Castling, en passant, promotion and terminal positions
//! - `proptest.rs` - Property-based tests over random legal play

mod edge_cases;
mod perft;
