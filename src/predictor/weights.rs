//! Scoring Weights
//!
//! Fixed coefficients of the demo heuristic. They are hand-picked demo
//! constants, not learned, and must stay exactly as written so existing
//! outputs do not shift.
//!
//! No scoring logic here - only constants.

// ============================================================================
// LEFT HAND (C3 dominant)
// ============================================================================

pub const LEFT_C3: f64 = 1.2;
pub const LEFT_C4: f64 = 0.8;
pub const LEFT_CZ: f64 = 0.2;
pub const LEFT_FZ: f64 = 0.1;

// ============================================================================
// RIGHT HAND (C4 dominant, mirror of LEFT)
// ============================================================================

pub const RIGHT_C4: f64 = 1.2;
pub const RIGHT_C3: f64 = 0.8;
pub const RIGHT_CZ: f64 = 0.2;
pub const RIGHT_FZ: f64 = 0.1;

// ============================================================================
// FOOT (Cz dominant)
// ============================================================================

pub const FOOT_CZ: f64 = 1.5;
pub const FOOT_C3: f64 = 0.3;
pub const FOOT_C4: f64 = 0.3;

// ============================================================================
// TONGUE (Fz dominant)
// ============================================================================

pub const TONGUE_FZ: f64 = 1.0;
pub const TONGUE_CZ: f64 = 0.2;

/// Weight of the frontal variability bonus
pub const TONGUE_STD_BONUS: f64 = 0.05;

/// Bonus ceiling, reached when `fz_std` equals [`TONGUE_STD_CENTER`]
pub const TONGUE_STD_CEILING: f64 = 3.0;

/// `fz_std` value that earns the full bonus
pub const TONGUE_STD_CENTER: f64 = 1.0;

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Added to the softmax denominator
pub const SOFTMAX_EPSILON: f64 = 1e-12;
