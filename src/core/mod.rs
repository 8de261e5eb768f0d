//! Core business logic module
//!
//! This module contains the balance-transfer engine:
//! - `engine` - account creation, balance reads, transfers, seeding,
//!   and the commit-mode selection for a transfer's two writes

pub mod engine;

pub use engine::{CommitMode, TransferEngine};
