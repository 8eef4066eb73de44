//! # stride-core
//!
//! Core types, ID generation, and error types for Stride.
//!
//! This crate provides the foundational types shared across all Stride crates:
//! - Assignment entity and the derived plan types (chunks, day groups, plans)
//! - Sparse per-chunk overrides and the map that persists them
//! - Sort and filter enums for assignment listings
//! - ID prefix constants and the stable chunk key
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod overrides;
pub mod responses;
