//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod alert;
pub mod books;
pub mod footer;
pub mod header;
pub mod logs;
pub mod stats;
