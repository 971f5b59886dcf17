//! codescout MCP server library.
//! The binary in main.rs wires [`server::ScoutServer`] to stdio transport.

pub mod server;
