//! End-to-end conversions through the real codec and upscaler.

mod common;

use common::fixtures::{self, CAT_HEIGHT, CAT_WIDTH};
use hqx::error::ConvertError;
use hqx::rendering::{ImageCodec, PngCodec};
use hqx::services::ConversionPipeline;
use hqx_scale::HqxScaler;
use pretty_assertions::assert_eq;

fn convert(tokens: &[&str]) -> Result<hqx::services::RunReport, ConvertError> {
    let codec = PngCodec::new();
    let upscaler = HqxScaler::new();
    ConversionPipeline::new(&codec, &upscaler).run(&fixtures::request(tokens), &mut ())
}

#[test]
fn test_single_factor_writes_one_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_cat(dir.path());
    let input_str = input.to_str().unwrap();

    let report = convert(&["--hq2x", input_str]).unwrap();

    assert_eq!(report.succeeded(), 1);
    common::assert_png_file(&fixtures::output_for(&input, 2), 128, 96);
    assert_eq!(
        fixtures::list_dir(dir.path()),
        vec!["cat.png", "cat.png_hq2x.png"]
    );
}

#[test]
fn test_all_writes_three_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_cat(dir.path());

    let report = convert(&["--all", input.to_str().unwrap()]).unwrap();

    assert_eq!(report.succeeded(), 3);
    for factor in [2, 3, 4] {
        common::assert_png_file(
            &fixtures::output_for(&input, factor),
            CAT_WIDTH * factor,
            CAT_HEIGHT * factor,
        );
    }
}

#[test]
fn test_failed_write_does_not_block_later_factors() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_cat(dir.path());
    // A directory where the 3x output should go makes that write fail
    std::fs::create_dir(fixtures::output_for(&input, 3)).unwrap();

    let report = convert(&["--all", input.to_str().unwrap()]).unwrap();

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    let failed = &report.outcomes[1];
    assert_eq!(failed.factor, 3);
    match &failed.result {
        Err(e @ ConvertError::Encode { .. }) => {
            assert!(e.to_string().contains("cat.png_hq3x.png"), "{e}")
        }
        other => panic!("expected Encode error, got {other:?}"),
    }
    common::assert_png_file(&fixtures::output_for(&input, 2), 128, 96);
    common::assert_png_file(&fixtures::output_for(&input, 4), 256, 192);
}

#[test]
fn test_missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.png");

    let result = convert(&["--hq2x", input.to_str().unwrap()]);

    match result {
        Err(e @ ConvertError::Decode { .. }) => {
            assert!(e.to_string().starts_with("Cannot load"), "{e}")
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
    assert!(fixtures::list_dir(dir.path()).is_empty());
}

#[test]
fn test_output_override_for_single_factor() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_cat(dir.path());
    let output = dir.path().join("big.png");

    convert(&[
        "--hq4x",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    common::assert_png_file(&output, 256, 192);
    common::assert_absent(&fixtures::output_for(&input, 4));
}

#[test]
fn test_other_containers_become_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.bmp");
    fixtures::write_gradient(&input, 10, 7);

    convert(&["--hq3x", input.to_str().unwrap()]).unwrap();

    common::assert_png_file(&fixtures::output_for(&input, 3), 30, 21);
}

#[test]
fn test_opaque_colours_survive_normalization() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.png");
    image::RgbImage::from_pixel(5, 5, image::Rgb([12, 34, 56]))
        .save(&input)
        .unwrap();

    convert(&["--hq2x", input.to_str().unwrap()]).unwrap();

    let output = PngCodec::new()
        .decode(&fixtures::output_for(&input, 2))
        .unwrap()
        .normalize()
        .unwrap();
    assert_eq!((output.width(), output.height()), (10, 10));
    assert!(output.pixels().iter().all(|&p| p == 0xFF0C_2238));
}
