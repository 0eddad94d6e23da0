//! CLI subcommands

pub mod files;
pub mod list;
pub mod new;
pub mod show;
