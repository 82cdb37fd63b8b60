use proptest::prelude::*;

use crate::numeric::decompose::DecompositionMethod;
use crate::numeric::normalize;
use crate::thresholds::DEFAULT_SEED;
use crate::{HistMethodKind, ThresholderConfig};

fn configs() -> Vec<ThresholderConfig> {
    let mut out = vec![
        ThresholderConfig::Aucp,
        ThresholderConfig::Decomp {
            decomp_method: DecompositionMethod::Pca,
        },
        ThresholderConfig::Decomp {
            decomp_method: DecompositionMethod::Nmf,
        },
        ThresholderConfig::Fgd,
        ThresholderConfig::Mcst { seed: DEFAULT_SEED },
    ];
    out.extend(HistMethodKind::ALL.into_iter().map(|hist_method| {
        ThresholderConfig::Hist {
            hist_method,
            nbins: None,
        }
    }));
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn labels_agree_with_threshold(scores in prop::collection::vec(-1e3f64..1e3, 1..60)) {
        let normalized = normalize(&scores);
        for config in configs() {
            let mut t = config.build();
            let labels = t.eval(&scores).unwrap();
            prop_assert_eq!(labels.len(), scores.len());

            let thresh = t.thresh();
            prop_assert!(thresh.is_some(), "{} left no threshold", t.name());
            let thresh = thresh.unwrap();
            for (label, v) in labels.iter().zip(&normalized) {
                prop_assert!(*label <= 1);
                prop_assert_eq!(*label, u8::from(*v > thresh), "{} at {}", t.name(), thresh);
            }
        }
    }

    #[test]
    fn repeated_eval_is_bitwise_stable(scores in prop::collection::vec(0.0f64..1.0, 3..40)) {
        for config in configs() {
            let mut t = config.build();
            let first = t.eval(&scores).unwrap();
            let first_thresh = t.thresh().map(f64::to_bits);
            let second = t.eval(&scores).unwrap();
            prop_assert_eq!(&first, &second, "{}", t.name());
            prop_assert_eq!(first_thresh, t.thresh().map(f64::to_bits), "{}", t.name());

            let mut fresh = config.build();
            prop_assert_eq!(fresh.eval(&scores).unwrap(), first);
            prop_assert_eq!(fresh.thresh().map(f64::to_bits), first_thresh);
        }
    }
}
