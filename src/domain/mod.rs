//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (decimals parsed, timestamps typed)
//! - `wire.rs` — Raw serde structs matching upstream responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods (where the domain owns endpoints)

pub mod asset;
pub mod exchange;
pub mod history;
pub mod market;
