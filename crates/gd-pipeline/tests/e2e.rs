//! End-to-end pipeline tests over real encoded image bytes.

use std::io::Cursor;

use gd_core::GlyphRamp;
use gd_core::params::RenderParams;
use gd_core::ramp::RAMP_COMPACT;
use gd_pipeline::{PipelineSettings, render_ascii};

/// Encode a greyscale pixel buffer as an in-memory PNG.
fn grey_png(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    let img = image::GrayImage::from_raw(width, height, pixels.to_vec())
        .expect("pixel buffer matches dimensions");
    let mut bytes = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encode");
    bytes
}

fn compact_settings(height_scale: f32) -> PipelineSettings {
    PipelineSettings {
        ramp: GlyphRamp::new(RAMP_COMPACT).expect("valid ramp"),
        height_scale,
        ..PipelineSettings::default()
    }
}

/// Ramp index of a rendered glyph (compact ramp has unique glyphs).
fn ramp_index(ch: char) -> usize {
    RAMP_COMPACT.chars().position(|c| c == ch).expect("glyph from ramp")
}

#[test]
fn grid_shape_matches_the_width_and_row_formula() {
    let bytes = grey_png(&vec![128u8; 40 * 30], 40, 30);
    let params = RenderParams {
        width: 20,
        ..Default::default()
    };
    let text = render_ascii(&bytes, &params, &PipelineSettings::default()).unwrap();

    // rows = floor(30 / (40/20) * 0.45) = floor(6.75) = 6
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    for line in lines {
        assert_eq!(line.chars().count(), 20);
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn uniform_input_renders_a_single_glyph() {
    let bytes = grey_png(&vec![200u8; 16 * 16], 16, 16);
    let params = RenderParams {
        width: 8,
        ..Default::default()
    };
    let text = render_ascii(&bytes, &params, &compact_settings(0.45)).unwrap();

    let glyphs: Vec<char> = text.chars().filter(|c| *c != '\n').collect();
    assert!(!glyphs.is_empty());
    assert!(glyphs.iter().all(|c| *c == glyphs[0]));
}

#[test]
fn identical_input_renders_identical_output() {
    let bytes = grey_png(&[0, 60, 120, 180, 240, 255, 30, 90, 150], 3, 3);
    let params = RenderParams {
        width: 3,
        ..Default::default()
    };
    let settings = compact_settings(1.0);
    let first = render_ascii(&bytes, &params, &settings).unwrap();
    let second = render_ascii(&bytes, &params, &settings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invert_is_an_exact_index_complement() {
    let bytes = grey_png(&[0, 60, 120, 180, 240, 255, 30, 90, 150], 3, 3);
    let settings = compact_settings(1.0);
    let normal = RenderParams {
        width: 3,
        ..Default::default()
    };
    let inverted = RenderParams {
        invert: true,
        ..normal
    };

    let plain = render_ascii(&bytes, &normal, &settings).unwrap();
    let flipped = render_ascii(&bytes, &inverted, &settings).unwrap();

    let last = RAMP_COMPACT.chars().count() - 1;
    for (a, b) in plain
        .chars()
        .zip(flipped.chars())
        .filter(|(a, _)| *a != '\n')
    {
        assert_eq!(ramp_index(a) + ramp_index(b), last);
    }
}

#[test]
fn two_by_two_ascending_luminance_descends_the_ramp() {
    // Luminances [0, 85, 170, 255], width 2, height_scale 1.0: the
    // source already matches the target grid, so no resampling distorts
    // the values. Default tone parameters.
    let bytes = grey_png(&[0, 85, 170, 255], 2, 2);
    let params = RenderParams {
        width: 2,
        ..Default::default()
    };
    let text = render_ascii(&bytes, &params, &compact_settings(1.0)).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let indices: Vec<usize> = text
        .chars()
        .filter(|c| *c != '\n')
        .map(ramp_index)
        .collect();
    assert_eq!(indices.len(), 4);
    // Brighter pixels carry strictly less ink.
    assert!(indices.windows(2).all(|w| w[0] > w[1]), "{indices:?}");
}

#[test]
fn extreme_aspect_ratio_is_rejected_before_allocation() {
    // A 1×4096 strip is a few KB encoded, but at width 512 it would
    // demand floor(4096 · 512 · 0.45) ≈ 940k rows. The row cap must
    // refuse it up front instead of sizing a resample buffer.
    let bytes = grey_png(&vec![128u8; 4096], 1, 4096);
    let params = RenderParams {
        width: 512,
        ..Default::default()
    };
    let err = render_ascii(&bytes, &params, &PipelineSettings::default()).unwrap_err();
    assert!(
        matches!(
            err,
            gd_core::RenderError::InvalidParameter { name: "width", .. }
        ),
        "{err}"
    );
}

#[test]
fn row_cap_is_inclusive() {
    let bytes = grey_png(&vec![128u8; 9], 3, 3);
    let params = RenderParams {
        width: 3,
        ..Default::default()
    };
    let mut settings = compact_settings(1.0);

    settings.max_rows = 3; // exactly the computed row count
    assert!(render_ascii(&bytes, &params, &settings).is_ok());

    settings.max_rows = 2;
    let err = render_ascii(&bytes, &params, &settings).unwrap_err();
    assert!(matches!(
        err,
        gd_core::RenderError::InvalidParameter { .. }
    ));
}

#[test]
fn empty_input_is_no_input_not_a_decode_error() {
    let err = render_ascii(&[], &RenderParams::default(), &PipelineSettings::default())
        .unwrap_err();
    assert!(matches!(err, gd_core::RenderError::NoInput));
}

#[test]
fn corrupt_bytes_are_a_decode_error() {
    let err = render_ascii(
        b"not an image at all",
        &RenderParams::default(),
        &PipelineSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, gd_core::RenderError::Decode(_)));
}

#[test]
fn default_ramp_renders_all_ascii_rows() {
    let bytes = grey_png(&(0u8..=255).collect::<Vec<u8>>(), 16, 16);
    let params = RenderParams {
        width: 16,
        ..Default::default()
    };
    let text = render_ascii(&bytes, &params, &PipelineSettings::default()).unwrap();
    assert!(text.is_ascii());
    assert_eq!(text.lines().count(), 7); // floor(16 * 0.45)
}
