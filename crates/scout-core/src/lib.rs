//! Core types for codescout: declaration records, the scan error taxonomy,
//! configuration, and output rendering shared by the CLI and MCP surfaces.

pub mod config;
pub mod decl;
pub mod error;
pub mod output;
