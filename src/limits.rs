//! Grammar bounds and DoS prevention constants.
//!
//! These keep every recognizer linear in the length of its own match.

/// Minimum host length before the top-level-domain dot.
pub const MIN_HOST_LEN: usize = 2;

/// Maximum host length before the top-level-domain dot.
pub const MAX_HOST_LEN: usize = 256;

/// Minimum top-level-domain length (lowercase letters only).
pub const MIN_TLD_LEN: usize = 2;

/// Maximum top-level-domain length (lowercase letters only).
pub const MAX_TLD_LEN: usize = 6;

/// Maximum backtick run length for code spans (prevents O(n^2) matching).
/// Longer runs are treated as literal text.
pub const MAX_CODE_SPAN_BACKTICKS: usize = 32;
