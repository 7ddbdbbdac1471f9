//! Integration tests for [`nfpa_diamond::DiamondRenderer`].
//!
//! Assets are generated per test in a temp dir: a 256x256 template, optional icons, no TrueType
//! font (so the built-in font is used and output is deterministic).

use std::sync::Arc;

use image::imageops::{overlay, resize, FilterType};
use image::{Rgba, RgbaImage};
use nfpa_diamond::{
    AssetPaths, DiamondError, DiamondFont, DiamondRenderer, Placard, Quadrant, SpecialHazard,
    SpecialMarking,
};
use tempfile::TempDir;

const SIZE: u32 = 256;
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([220, 0, 0, 255]);

struct Fixture {
    dir: TempDir,
    renderer: DiamondRenderer,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::create_dir_all(dir.path().join("out")).unwrap();
        template().save(dir.path().join("blank_diamond.png")).unwrap();

        let assets = AssetPaths::under(dir.path()).with_font(None);
        let renderer = DiamondRenderer::new(assets, dir.path().join("out"));
        Self { dir, renderer }
    }

    fn add_icon(&self, hazard: SpecialHazard) -> RgbaImage {
        let icon = icon();
        icon.save(self.renderer.assets().icon_path(hazard)).unwrap();
        icon
    }

    fn output_files(&self) -> usize {
        std::fs::read_dir(self.dir.path().join("out")).unwrap().count()
    }
}

/// White canvas with a light grey bottom quadrant standing in for the template artwork.
fn template() -> RgbaImage {
    RgbaImage::from_fn(SIZE, SIZE, |_, y| {
        if y > SIZE / 2 {
            Rgba([200, 200, 200, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

/// 480x480 icon drawn for the native canvas: transparent 80px border around an opaque red
/// square. On the 256 px test canvas it is composited at 60x60.
fn icon() -> RgbaImage {
    RgbaImage::from_fn(480, 480, |x, y| {
        if (80..400).contains(&x) && (80..400).contains(&y) {
            RED
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn placard(h: i64, f: i64, r: i64, special: &str) -> Placard {
    Placard::from_raw(h, f, r, special).unwrap()
}

/// Canvas the renderer should produce: template plus built-in text at the three rating anchors.
fn expected_with_ratings(h: &str, f: &str, r: &str) -> RgbaImage {
    let mut canvas = template();
    let px = nfpa_diamond::layout::glyph_px(SIZE);
    for (quadrant, text) in [(Quadrant::Left, h), (Quadrant::Top, f), (Quadrant::Right, r)] {
        DiamondFont::builtin().unwrap().draw_centered(
            &mut canvas,
            text,
            quadrant.anchor(SIZE, SIZE),
            px,
            BLACK,
        );
    }
    canvas
}

/// Box around the bottom anchor that no rating glyph reaches.
fn special_region(img: &RgbaImage) -> Vec<Rgba<u8>> {
    let mut pixels = Vec::new();
    for y in 175..215 {
        for x in 100..156 {
            pixels.push(*img.get_pixel(x, y));
        }
    }
    pixels
}

fn dark_pixels(pixels: &[Rgba<u8>]) -> usize {
    pixels.iter().filter(|p| p[0] < 128 && p[1] < 128 && p[2] < 128).count()
}

#[test]
fn test_every_valid_input_renders_at_template_size() {
    let fx = Fixture::new();
    fx.add_icon(SpecialHazard::Acid);

    let mut specials: Vec<&str> = SpecialHazard::ALL.iter().map(|h| h.code()).collect();
    specials.push("");

    for h in 0..=4 {
        for f in 0..=4 {
            for r in 0..=4 {
                for special in &specials {
                    let img = fx.renderer.render_image(&placard(h, f, r, special)).unwrap();
                    assert_eq!(img.dimensions(), (SIZE, SIZE));
                }
            }
        }
    }

    let out = fx.renderer.render(&placard(1, 2, 3, "W")).unwrap();
    assert!(std::fs::metadata(out.path()).unwrap().len() > 0);
    assert_eq!(image::open(out.path()).unwrap().to_rgba8().dimensions(), (SIZE, SIZE));
}

#[test]
fn test_no_special_leaves_bottom_quadrant_untouched() {
    let fx = Fixture::new();
    let img = fx.renderer.render_image(&placard(2, 3, 1, "")).unwrap();

    assert_eq!(special_region(&img), special_region(&template()));
    assert_eq!(img, expected_with_ratings("2", "3", "1"));
}

#[test]
fn test_icon_is_composited_instead_of_text() {
    let fx = Fixture::new();
    fx.add_icon(SpecialHazard::Acid);

    let img = fx.renderer.render_image(&placard(2, 3, 1, "ACID")).unwrap();
    let (ax, ay) = Quadrant::Bottom.anchor(SIZE, SIZE);

    assert_eq!(*img.get_pixel(ax as u32, ay as u32), RED);
    // transparent icon border keeps the template underneath
    assert_eq!(*img.get_pixel(ax as u32 - 28, ay as u32 - 28), Rgba([200, 200, 200, 255]));
    assert_eq!(dark_pixels(&special_region(&img)), 0);
}

#[test]
fn test_icon_scales_with_canvas() {
    let fx = Fixture::new();
    fx.add_icon(SpecialHazard::Oxidizer);

    let img = fx.renderer.render_image(&placard(0, 0, 0, "OX")).unwrap();
    let (ax, ay) = Quadrant::Bottom.anchor(SIZE, SIZE);
    let (ax, ay) = (ax as u32, ay as u32);

    // red core spans 40px around the anchor, not the 320px of the native-size icon
    assert_eq!(*img.get_pixel(ax + 15, ay + 15), RED);
    assert_eq!(*img.get_pixel(ax - 15, ay - 15), RED);
    assert_eq!(*img.get_pixel(ax + 40, ay), Rgba([200, 200, 200, 255]));
    assert_eq!(*img.get_pixel(ax, ay + 40), Rgba([200, 200, 200, 255]));
}

#[test]
fn test_missing_icon_falls_back_to_code_text() {
    let fx = Fixture::new();

    let img = fx.renderer.render_image(&placard(2, 3, 1, "ACID")).unwrap();
    assert!(dark_pixels(&special_region(&img)) > 0);

    let as_text = Placard {
        special: SpecialMarking::FreeText("ACID".to_string()),
        ..placard(2, 3, 1, "")
    };
    assert_eq!(img, fx.renderer.render_image(&as_text).unwrap());
}

#[test]
fn test_unrecognized_code_draws_text() {
    let fx = Fixture::new();
    fx.add_icon(SpecialHazard::Acid);

    let p = placard(0, 1, 2, "xyz");
    assert_eq!(p.special, SpecialMarking::FreeText("XYZ".to_string()));

    let img = fx.renderer.render_image(&p).unwrap();
    let mut expected = expected_with_ratings("0", "1", "2");
    DiamondFont::builtin().unwrap().draw_centered(
        &mut expected,
        "XYZ",
        Quadrant::Bottom.anchor(SIZE, SIZE),
        nfpa_diamond::layout::glyph_px(SIZE),
        BLACK,
    );
    assert_eq!(img, expected);
}

#[test]
fn test_missing_template_is_reported_and_writes_nothing() {
    let fx = Fixture::new();
    std::fs::remove_file(&fx.renderer.assets().template).unwrap();

    let err = fx.renderer.render(&placard(1, 1, 1, "")).unwrap_err();
    match &err {
        DiamondError::MissingAsset { path, .. } => {
            assert_eq!(path, &fx.renderer.assets().template)
        }
        other => panic!("expected MissingAsset, got {:?}", other),
    }
    assert!(err.to_string().contains("blank_diamond.png"));
    assert_eq!(fx.output_files(), 0);
}

#[test]
fn test_all_zero_scenario() {
    let fx = Fixture::new();
    let out = fx.renderer.render(&placard(0, 0, 0, "")).unwrap();

    let img = image::open(out.path()).unwrap().to_rgba8();
    assert_eq!(img, expected_with_ratings("0", "0", "0"));
}

#[test]
fn test_all_four_with_radioactive_icon_scenario() {
    let fx = Fixture::new();
    let icon = fx.add_icon(SpecialHazard::Radioactive);
    let out = fx.renderer.render(&placard(4, 4, 4, "RADIO")).unwrap();

    let mut expected = expected_with_ratings("4", "4", "4");
    let (ax, ay) = Quadrant::Bottom.anchor(SIZE, SIZE);
    let scaled = resize(&icon, 60, 60, FilterType::Triangle);
    overlay(&mut expected, &scaled, ax as i64 - 30, ay as i64 - 30);

    assert_eq!(image::open(out.path()).unwrap().to_rgba8(), expected);
}

#[test]
fn test_output_file_is_unique_and_removed_on_drop() {
    let fx = Fixture::new();
    let first = fx.renderer.render(&placard(1, 1, 1, "")).unwrap();
    let second = fx.renderer.render(&placard(1, 1, 1, "")).unwrap();

    assert_ne!(first.path(), second.path());
    assert_eq!(fx.output_files(), 2);

    let first_path = first.path().to_path_buf();
    drop(first);
    assert!(!first_path.exists());
    assert_eq!(fx.output_files(), 1);

    drop(second);
    assert_eq!(fx.output_files(), 0);
}

#[test]
fn test_render_to_overwrites_target() {
    let fx = Fixture::new();
    let target = fx.dir.path().join("preview.png");
    std::fs::write(&target, b"stale").unwrap();

    fx.renderer.render_to(&placard(3, 2, 1, ""), &target).unwrap();
    assert_eq!(
        image::open(&target).unwrap().to_rgba8(),
        expected_with_ratings("3", "2", "1")
    );
}

#[test]
fn test_concurrent_renders_use_separate_files() {
    let fx = Fixture::new();
    let renderer = Arc::new(fx.renderer.clone());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render(&placard(i, i, i, "")).unwrap())
        })
        .collect();
    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let mut paths: Vec<_> = outputs.iter().map(|o| o.path().to_path_buf()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 4);
    for (i, out) in outputs.iter().enumerate() {
        let n = i.to_string();
        assert_eq!(
            image::open(out.path()).unwrap().to_rgba8(),
            expected_with_ratings(&n, &n, &n)
        );
    }
}
