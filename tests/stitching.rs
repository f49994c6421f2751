use std::collections::HashSet;

use stitcher::stitching::rebin::binned_classification;
use stitcher::{
    create_timeframes, default_label_mapping, Classification, Prediction, StitchError,
    StitchOutput, Stitcher, StitcherConfig, TimeFrame,
};

const LABELS: [&str; 4] = ["bars", "chyron", "credits", "slate"];

fn prediction(timepoint: i64, pairs: &[(&str, f64)]) -> Prediction {
    let classification: Classification = pairs.iter().map(|(l, s)| (l.to_string(), *s)).collect();
    Prediction::new(format!("tp_{timepoint}"), "v_1", timepoint, classification).unwrap()
}

/// Deterministic pseudo-random stream with runs of high scores so that
/// labels compete for the same timepoints.
fn noisy_stream(len: usize) -> Vec<Prediction> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..len)
        .map(|i| {
            let hot = LABELS[(i / 7) % LABELS.len()];
            let pairs: Vec<(&str, f64)> = LABELS
                .iter()
                .map(|&label| {
                    let noise = next();
                    let score = if label == hot {
                        0.4 + 0.6 * noise
                    } else if noise < 0.3 {
                        0.0
                    } else {
                        noise * 0.8
                    };
                    (label, score)
                })
                .collect();
            prediction(i as i64 * 1000, &pairs)
        })
        .collect()
}

fn member_timepoints(frame: &TimeFrame) -> HashSet<i64> {
    frame.timepoints().collect()
}

// -- scenarios ----------------------------------------------------------------

#[test]
fn bars_run_ends_at_low_sample() {
    let predictions = vec![
        prediction(0, &[("bars", 0.9), ("slate", 0.001)]),
        prediction(1000, &[("bars", 0.8), ("slate", 0.001)]),
        prediction(2000, &[("bars", 0.85), ("slate", 0.001)]),
        prediction(3000, &[("bars", 0.005), ("slate", 0.001)]),
    ];
    let frames = create_timeframes(predictions, &StitcherConfig::default()).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].label(), "bars");
    assert_eq!(frames[0].timepoints().collect::<Vec<_>>(), vec![0, 1000, 2000]);
    assert!((frames[0].score() - 0.85).abs() < 1e-9);
    assert_eq!(frames[0].representatives(), &[0]);
}

#[test]
fn all_below_threshold_gives_empty_output() {
    let predictions: Vec<Prediction> = (0..10)
        .map(|i| prediction(i * 500, &[("bars", 0.001), ("credits", 0.0)]))
        .collect();
    let frames = create_timeframes(predictions, &StitcherConfig::default()).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn one_shared_timepoint_drops_whole_lower_frame() {
    let predictions = vec![
        prediction(0, &[("credits", 0.6), ("slate", 0.0)]),
        prediction(1000, &[("credits", 0.6), ("slate", 0.0)]),
        prediction(2000, &[("credits", 0.6), ("slate", 0.95)]),
        prediction(3000, &[("credits", 0.0), ("slate", 0.95)]),
        prediction(4000, &[("credits", 0.0), ("slate", 0.95)]),
    ];
    let frames = create_timeframes(predictions, &StitcherConfig::default()).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].label(), "slate");
    assert_eq!(frames[0].start(), 2000);
    assert_eq!(frames[0].end(), 4000);
}

#[test]
fn invalid_streams_fail_without_output() {
    let stitcher = Stitcher::default();
    assert!(matches!(
        stitcher.create_timeframes(Vec::new()),
        Err(StitchError::InvalidPredictionStream(_))
    ));

    let unordered = vec![
        prediction(2000, &[("bars", 0.9)]),
        prediction(1000, &[("bars", 0.9)]),
    ];
    assert!(matches!(
        stitcher.create_timeframes(unordered),
        Err(StitchError::InvalidPredictionStream(_))
    ));
}

#[test]
fn missing_fine_label_fails_rebinning() {
    let config = StitcherConfig::default().with_label_mapping(default_label_mapping());
    let predictions = vec![
        prediction(0, &[("B", 0.9), ("S", 0.1)]),
        prediction(1000, &[("B", 0.9), ("S", 0.1)]),
    ];
    let err = create_timeframes(predictions, &config).unwrap_err();
    assert!(matches!(err, StitchError::LabelMapping { .. }));
}

// -- properties ---------------------------------------------------------------

#[test]
fn output_is_deterministic() {
    let stitcher = Stitcher::default();
    let first = stitcher.create_timeframes(noisy_stream(200)).unwrap();
    let second = stitcher.create_timeframes(noisy_stream(200)).unwrap();

    let first = serde_json::to_string(&StitchOutput::new(Vec::new(), &first)).unwrap();
    let second = serde_json::to_string(&StitchOutput::new(Vec::new(), &second)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_frames_are_disjoint() {
    let frames = Stitcher::default().create_timeframes(noisy_stream(200)).unwrap();
    assert!(!frames.is_empty());
    for (i, a) in frames.iter().enumerate() {
        for b in &frames[i + 1..] {
            assert!(member_timepoints(a).is_disjoint(&member_timepoints(b)), "{a} overlaps {b}");
        }
    }
}

#[test]
fn output_frames_pass_thresholds() {
    let config = StitcherConfig {
        min_timeframe_score: 0.55,
        min_frame_count: 3,
        ..Default::default()
    };
    let frames = create_timeframes(noisy_stream(200), &config).unwrap();
    for frame in &frames {
        assert!(frame.score() > config.min_timeframe_score);
        assert!(frame.len() >= config.min_frame_count);
    }
}

#[test]
fn output_is_sorted_by_start() {
    let frames = Stitcher::default().create_timeframes(noisy_stream(200)).unwrap();
    assert!(frames.windows(2).all(|w| w[0].start() <= w[1].start()));
}

#[test]
fn representatives_are_members() {
    let config = StitcherConfig::default();
    let frames = create_timeframes(noisy_stream(200), &config).unwrap();
    for frame in &frames {
        let members = member_timepoints(frame);
        assert!(frame.representatives().iter().all(|tp| members.contains(tp)));
        if config.is_static(frame.label()) {
            assert_eq!(frame.representatives().len(), 1);
        }
    }
}

#[test]
fn rebinning_sums_fine_scores() {
    let mapping = default_label_mapping();
    let raw = prediction(
        0,
        &[
            ("B", 0.1),
            ("S", 0.05),
            ("S:H", 0.1),
            ("S:C", 0.0),
            ("S:D", 0.2),
            ("S:G", 0.05),
            ("I", 0.1),
            ("N", 0.1),
            ("Y", 0.1),
            ("C", 0.2),
        ],
    );
    let binned = binned_classification(&raw, &mapping).unwrap();
    for (coarse, fine_labels) in &mapping {
        let expected: f64 = fine_labels
            .iter()
            .map(|fine| raw.score_for_label(fine).unwrap())
            .sum();
        assert!((binned[coarse] - expected).abs() < 1e-12, "{coarse}");
    }
}
