//! Command implementations for the Skillcheck CLI

pub mod check;
pub mod completions;
pub mod find;
pub mod helpers;
pub mod list;
pub mod show;
pub mod version;
