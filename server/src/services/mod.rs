//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own deck logic and export rendering so route handlers can
//! stay focused on protocol translation and state locking.

pub mod deck;
pub mod export;
