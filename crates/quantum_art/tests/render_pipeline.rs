//! End-to-end checks of the renderer and the correlation report driven by
//! real generators.

use quantum_art::analysis::{quantum_analysis, CorrelationMatrix};
use quantum_art::animation::{FractalAnimator, NoPause};
use quantum_art::fractal::{gravitational_lensing, singularity_matrix, PALETTE};
use quantum_art::{AnalysisConfig, RenderConfig};
use quantum_core::rng::FixedEntropy;
use quantum_core::{EntangledStreamGenerator, StreamParams};

#[test]
fn test_default_render_with_seed_42() {
    let mut out = Vec::new();
    let frames = FractalAnimator::new(&mut out, NoPause, RenderConfig::default())
        .run(EntangledStreamGenerator::new(Some(42)))
        .unwrap();

    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert_eq!(frame.height(), 40);
        for row in frame.rows() {
            assert_eq!(row.chars().count(), 80);
            assert!(row.chars().all(|c| PALETTE.contains(&c)));
        }
    }

    let text = String::from_utf8(out).unwrap();
    // Each frame ends with a cursor-up escape and no trailing newline.
    assert_eq!(text.matches('\n').count(), 3 * 40);
    assert_eq!(text.matches("\x1b[40A").count(), 3);
}

#[test]
fn test_render_consumes_expected_draws() {
    let (width, height) = (12, 6);
    let mut stream = EntangledStreamGenerator::new(Some(9));
    let matrix = singularity_matrix(&mut stream, width, height);
    let _ = gravitational_lensing(&mut stream, matrix);

    // 3 draws per cell plus one per row, 7 cursor steps per draw.
    let draws = 3 * width * height + height;
    assert_eq!(stream.cursor(), (draws * 7) % 11);
}

#[test]
fn test_density_does_not_change_output() {
    let render = |density: f64| {
        let config = RenderConfig::builder()
            .width(20)
            .height(8)
            .frames(1)
            .density(density)
            .build()
            .unwrap();
        let mut out = Vec::new();
        FractalAnimator::new(&mut out, NoPause, config)
            .run(EntangledStreamGenerator::new(Some(5)))
            .unwrap();
        out
    };
    assert_eq!(render(0.0), render(0.9));
}

#[test]
fn test_fixed_entropy_collapses_to_one_quantum_bucket() {
    // Every sample rebuilds the same generator, so every quantum value is
    // identical and all counts share one quantum bucket.
    let config = AnalysisConfig {
        samples: 8,
        classical_seed: Some(1),
        params: StreamParams::builder().dimensions(13).samples(41).build().unwrap(),
    };
    let matrix: CorrelationMatrix = quantum_analysis(&config, &FixedEntropy::new(3)).unwrap();

    let quantum_keys: std::collections::BTreeSet<i64> = matrix
        .rows()
        .flat_map(|(_, row)| row.keys().copied())
        .collect();
    assert_eq!(quantum_keys.len(), 1);
    assert_eq!(matrix.total(), 8);
}
