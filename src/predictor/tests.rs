//! Behavioral tests for the predictor
//!
//! Probability invariants, boundary scenarios and mirror symmetry.

#[cfg(test)]
mod predictor_tests {
    use crate::predictor::{
        predict,
        layout::{FEATURE_LAYOUT, MEAN_MAX, MEAN_MIN, STD_MAX, STD_MIN},
        scoring::score,
        softmax::softmax,
        ClassLabel, FeatureVector,
    };

    const TOLERANCE: f64 = 1e-9;

    /// Deterministic sweep over the slider ranges
    fn grid() -> Vec<FeatureVector> {
        let means = [MEAN_MIN, -2.5, -0.3, 0.0, 1.7, MEAN_MAX];
        let stds = [STD_MIN, 1.0, 2.2, STD_MAX];
        let mut out = Vec::new();
        for &fz in &means {
            for &std in &stds {
                for &c3 in &means {
                    for &cz in &[MEAN_MIN, 0.0, MEAN_MAX] {
                        for &c4 in &means {
                            out.push(FeatureVector::new(fz, std, c3, cz, c4));
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_probabilities_form_distribution() {
        for f in grid() {
            let result = predict(&f);
            let mut sum = 0.0;
            for &(_, p) in result.probabilities() {
                assert!((0.0..=1.0).contains(&p), "p={} for {:?}", p, f);
                sum += p;
            }
            assert!((sum - 1.0).abs() < TOLERANCE, "sum={} for {:?}", sum, f);
        }
    }

    #[test]
    fn test_output_in_label_order() {
        let result = predict(&FeatureVector::default());
        let labels: Vec<ClassLabel> = result.probabilities().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ClassLabel::ALL.to_vec());
    }

    #[test]
    fn test_softmax_shift_invariance() {
        for f in grid().into_iter().step_by(37) {
            let scores = score(&f).as_array();
            let base = softmax(&scores);
            for shift in [-50.0, -1.5, 0.25, 7.0, 300.0] {
                let shifted = softmax(&scores.map(|s| s + shift));
                for (a, b) in base.iter().zip(shifted.iter()) {
                    assert!((a - b).abs() < TOLERANCE, "shift {} changed {} -> {}", shift, a, b);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for f in grid().into_iter().step_by(11) {
            let a = predict(&f);
            let b = predict(&f);
            for (x, y) in a.probabilities().iter().zip(b.probabilities().iter()) {
                assert_eq!(x.1.to_bits(), y.1.to_bits());
            }
            assert_eq!(a.predicted(), b.predicted());
        }
    }

    #[test]
    fn test_argmax_consistency() {
        for f in grid() {
            let result = predict(&f);
            let top = result.probability(result.predicted());
            for &(label, p) in result.probabilities() {
                assert!(top >= p);
                // Anything tied with the winner must come after it
                if p == top {
                    assert!(result.predicted().index() <= label.index());
                }
            }
        }
    }

    #[test]
    fn test_tie_resolves_to_first_label() {
        // Left and Right scores are both -0.1 * fz_mean, Tongue sinks
        let result = predict(&FeatureVector::new(-4.0, 1.0, 0.0, 0.0, 0.0));
        assert_eq!(result.probability(ClassLabel::Left), result.probability(ClassLabel::Right));
        assert_eq!(result.predicted(), ClassLabel::Left);
    }

    #[test]
    fn test_neutral_input_prefers_tongue() {
        let result = predict(&FeatureVector::new(0.0, 1.0, 0.0, 0.0, 0.0));
        assert_eq!(result.predicted(), ClassLabel::Tongue);

        let left = result.probability(ClassLabel::Left);
        assert_eq!(left, result.probability(ClassLabel::Right));
        assert_eq!(left, result.probability(ClassLabel::Foot));
        assert!(result.probability(ClassLabel::Tongue) > left);
    }

    #[test]
    fn test_left_motor_dominant() {
        let result = predict(&FeatureVector::new(0.0, 1.0, 4.0, 0.0, -4.0));
        assert_eq!(result.predicted(), ClassLabel::Left);
        assert!(result.probability(ClassLabel::Left) > 0.99);
        for label in [ClassLabel::Right, ClassLabel::Foot, ClassLabel::Tongue] {
            assert!(result.probability(label) < 0.01);
        }
    }

    #[test]
    fn test_central_dominant_is_foot() {
        let result = predict(&FeatureVector::new(0.0, 1.0, 0.0, 4.0, 0.0));
        assert_eq!(result.predicted(), ClassLabel::Foot);
        assert!(result.probability(ClassLabel::Foot) > 0.95);
    }

    #[test]
    fn test_mirror_swaps_left_and_right() {
        for f in grid().into_iter().step_by(7) {
            let a = predict(&f);
            let b = predict(&f.mirrored());
            let close = |x: f64, y: f64| (x - y).abs() < 1e-12;

            assert!(close(a.probability(ClassLabel::Left), b.probability(ClassLabel::Right)));
            assert!(close(a.probability(ClassLabel::Right), b.probability(ClassLabel::Left)));
            assert!(close(a.probability(ClassLabel::Foot), b.probability(ClassLabel::Foot)));
            assert!(close(a.probability(ClassLabel::Tongue), b.probability(ClassLabel::Tongue)));
        }
    }

    #[test]
    fn test_non_finite_input_does_not_panic() {
        let inputs = [
            FeatureVector::new(f64::NAN, 1.0, 0.0, 0.0, 0.0),
            FeatureVector::new(0.0, f64::INFINITY, 0.0, 0.0, 0.0),
            FeatureVector::new(0.0, 1.0, f64::INFINITY, 0.0, f64::NEG_INFINITY),
        ];
        for f in inputs {
            let result = predict(&f);
            let _ = result.percentages();
        }
    }

    #[test]
    fn test_nan_input_propagates() {
        let result = predict(&FeatureVector::new(f64::NAN, 1.0, 0.0, 0.0, 0.0));
        assert!(result.probabilities().iter().all(|(_, p)| p.is_nan()));
    }

    #[test]
    fn test_infinite_std_silences_tongue() {
        let result = predict(&FeatureVector::new(0.0, f64::INFINITY, 0.0, 0.0, 0.0));
        assert_eq!(result.probability(ClassLabel::Tongue), 0.0);
        assert_eq!(result.predicted(), ClassLabel::Left);
    }

    #[test]
    fn test_out_of_range_input_still_a_distribution() {
        let result = predict(&FeatureVector::new(40.0, 12.0, -35.0, 18.0, 90.0));
        let sum: f64 = result.probabilities().iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < TOLERANCE);
        assert_eq!(result.predicted(), ClassLabel::Right);
    }

    #[test]
    fn test_percentages_round_like_display() {
        let result = predict(&FeatureVector::new(0.0, 1.0, 4.0, 0.0, -4.0));
        let pct = result.percentages();
        assert_eq!(pct[0], (ClassLabel::Left, 100));
        assert_eq!(pct[1], (ClassLabel::Right, 0));
    }

    #[test]
    fn test_default_vector_matches_layout() {
        let f = FeatureVector::default();
        for spec in &FEATURE_LAYOUT {
            assert_eq!(f.get_by_name(spec.name), Some(spec.default));
        }
    }

    #[test]
    fn test_feature_vector_json_shape() {
        let f: FeatureVector = serde_json::from_str(
            r#"{"fz_mean":0.5,"fz_std":1.2,"c3_mean":-1.0,"cz_mean":0.0,"c4_mean":2.0}"#,
        )
        .unwrap();
        assert_eq!(f, FeatureVector::new(0.5, 1.2, -1.0, 0.0, 2.0));
    }
}
