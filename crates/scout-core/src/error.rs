//! Scan failure taxonomy.
//!
//! Only failures that abort a whole scan live here. Recoverable conditions
//! (missing ignore file, a single unreadable source file) are absorbed at
//! the point they occur and never surface through this type.

/// A failure that aborts a single scan invocation.
///
/// None of these are fatal to a hosting process; the scanner holds no state
/// across calls, so the next scan starts clean.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Missing or malformed root path. No traversal was attempted.
    #[error("invalid scan request: {0}")]
    InvalidRequest(String),

    /// File discovery exceeded its wall-clock budget. Distinct from an
    /// empty result: no partial file list is treated as complete.
    #[error("file discovery exceeded its {limit_ms}ms budget")]
    TraversalTimeout { limit_ms: u64 },

    /// The overall scan (discovery plus extraction) exceeded its budget.
    /// Distinct from [`ScanError::TraversalTimeout`] so callers can tell
    /// discovery slowness from extraction slowness.
    #[error("scan exceeded its overall {limit_ms}ms budget")]
    ScanTimeout { limit_ms: u64 },
}
