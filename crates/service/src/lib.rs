//! Domain layer for the contact directory.
//! - Defines the `Contact` entity and its validation rules.
//! - Exposes a repository trait so the HTTP transport stays storage-agnostic.
//! - Ships a JSON file-backed document store and an in-memory twin with
//!   identical semantics.

pub mod contact;
pub mod errors;
pub mod file;
pub mod repository;
pub mod storage;
