//! Test helpers shared across crates.
//!
//! This crate provides descriptor builders for common declaration shapes,
//! manifest helpers for driving the command-line tool, `figment::Jail`
//! wrappers and text helpers for inspecting generated source.

pub mod descriptors;
pub mod figment;
pub mod manifest;
pub mod text;
