#![forbid(unsafe_code)]

//! Persistence for daily habit records: the repository contract, an
//! in-memory implementation, and a `SQLite` backend.

pub mod repository;
pub mod sqlite;
