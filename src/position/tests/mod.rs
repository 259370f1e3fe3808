//! Position module tests.
//!
//! - `edge_cases.rs` - castling, en passant and corner-square bookkeeping
//! - `sequences.rs` - multi-move games checked against known FENs
//! - `proptest.rs` - property-based tests

mod proptest;
