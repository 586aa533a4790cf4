//! # hsp-core
//!
//! Core types shared across the Hospshop ops crates:
//! - Report structs returned by `hsp` commands (start/stop/status,
//!   backups, deploy packaging)
//! - Service state enums
//! - Project root discovery (the `.hospshop` marker directory)

pub mod enums;
pub mod project;
pub mod responses;
