//! Class scoring
//!
//! Four fixed linear combinations of the input features. Terms are
//! evaluated left to right; reordering them changes results in the last bit.

use super::types::{ClassScores, FeatureVector};
use super::weights::*;

/// Compute the unnormalized score of every class
pub fn score(f: &FeatureVector) -> ClassScores {
    ClassScores {
        left: score_left(f),
        right: score_right(f),
        foot: score_foot(f),
        tongue: score_tongue(f),
    }
}

fn score_left(f: &FeatureVector) -> f64 {
    LEFT_C3 * f.c3_mean - LEFT_C4 * f.c4_mean + LEFT_CZ * f.cz_mean - LEFT_FZ * f.fz_mean
}

fn score_right(f: &FeatureVector) -> f64 {
    RIGHT_C4 * f.c4_mean - RIGHT_C3 * f.c3_mean + RIGHT_CZ * f.cz_mean - RIGHT_FZ * f.fz_mean
}

fn score_foot(f: &FeatureVector) -> f64 {
    FOOT_CZ * f.cz_mean - FOOT_C3 * f.c3_mean - FOOT_C4 * f.c4_mean
}

fn score_tongue(f: &FeatureVector) -> f64 {
    TONGUE_FZ * f.fz_mean - TONGUE_CZ * f.cz_mean + std_bonus(f.fz_std)
}

/// Small bonus peaking when the frontal std sits at 1.0
fn std_bonus(fz_std: f64) -> f64 {
    TONGUE_STD_BONUS * (TONGUE_STD_CEILING - (fz_std - TONGUE_STD_CENTER).abs())
}
