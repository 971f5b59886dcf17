//! Regex-based structure extraction over a directory tree.
//!
//! Pattern-matching heuristics, not parsing: good enough for cheap
//! structural metadata (function and class declarations with line numbers),
//! not for exact analysis. The public entry point is [`scan::scan`].

pub mod collect;
pub mod extract;
pub mod ignore_rules;
pub mod languages;
pub mod linemap;
pub mod scan;
