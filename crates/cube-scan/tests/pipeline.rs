#![cfg(feature = "image")]

use std::path::{Path, PathBuf};

use cube_scan::core::{Color, FaceId};
use cube_scan::face::{FaceValidator, PALETTE};
use cube_scan::io::{scan_cube, scan_cube_from_config, FaceImageConfig, ScanConfig, ScanReport};
use cube_scan::scan::{load_rgb, validate_face};
use cube_scan::solve::{solve, SolveError, STEP_COUNT};
use image::RgbImage;

fn anchor(color: Color) -> image::Rgb<u8> {
    let (_, rgb) = PALETTE
        .iter()
        .copied()
        .find(|(c, _)| *c == color)
        .expect("palette color");
    image::Rgb([rgb.r, rgb.g, rgb.b])
}

/// 60x60 photo of a uniform face, with `noisy` cells painted black.
fn face_photo(color: Color, noisy: usize) -> RgbImage {
    let mut img = RgbImage::from_pixel(60, 60, anchor(color));
    for cell in 0..noisy {
        let (row, col) = (cell / 3, cell % 3);
        for y in row * 20..(row + 1) * 20 {
            for x in col * 20..(col + 1) * 20 {
                img.put_pixel(x as u32, y as u32, image::Rgb([0, 0, 0]));
            }
        }
    }
    img
}

fn write_face(dir: &Path, name: &str, color: Color, noisy: usize) -> String {
    let file = format!("{name}.png");
    face_photo(color, noisy)
        .save(dir.join(&file))
        .expect("write png");
    file
}

fn solved_config(dir: &Path) -> ScanConfig {
    let faces = FaceId::ALL
        .iter()
        .zip(Color::ALL)
        .map(|(&id, color)| FaceImageConfig {
            id,
            image_path: write_face(dir, &format!("face{}", id.get()), color, 0),
        })
        .collect();
    ScanConfig {
        faces,
        output_path: None,
        validator: None,
    }
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join("scan.json")
}

#[test]
fn six_distinct_faces_complete_the_cube() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = solved_config(dir.path());

    let (session, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    assert!(report.is_complete);
    assert_eq!(report.validated, 6);
    assert_eq!(report.captured, 6);
    assert!(report.color_counts.values().all(|&n| n == 9));
    assert!(report.faces.iter().all(|f| f.error.is_none() && !f.stale));

    let steps = report.solution.expect("solution for a complete cube");
    assert_eq!(steps.len(), STEP_COUNT);
    assert_eq!(steps, solve(&session).expect("solve"));
}

#[test]
fn blurry_face_is_rejected_and_blocks_the_solution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = solved_config(dir.path());
    cfg.faces[2].image_path = write_face(dir.path(), "left_blurry", Color::Blue, 3);

    let (session, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    let left = &report.faces[2];
    let validation = left.validation.expect("validation");
    assert!(!validation.is_valid);
    assert!(validation.colors.is_none());
    assert_eq!(left.confident_cells, Some(6));

    assert_eq!(report.captured, 6);
    assert_eq!(report.validated, 5);
    assert!(!report.is_complete);
    assert!(report.solution.is_none());
    assert!(matches!(
        solve(&session),
        Err(SolveError::CubeIncomplete { validated: 5 })
    ));
}

#[test]
fn repeated_colors_validate_but_do_not_complete() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = solved_config(dir.path());
    cfg.faces[1].image_path = write_face(dir.path(), "back_white", Color::White, 0);

    let (_, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    assert_eq!(report.validated, 6);
    assert!(!report.is_complete);
    assert_eq!(report.color_counts.get(&Color::White), Some(&18));
    assert_eq!(report.color_counts.get(&Color::Red).copied().unwrap_or(0), 0);
}

#[test]
fn later_retake_supersedes_earlier_photo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = solved_config(dir.path());
    cfg.faces.insert(
        0,
        FaceImageConfig {
            id: FaceId::FRONT,
            image_path: write_face(dir.path(), "front_first", Color::Green, 0),
        },
    );

    let (session, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    assert!(report.faces[0].stale);
    assert!(!report.faces[1].stale);
    let front = session.face(FaceId::FRONT).colors().expect("front grid");
    assert!(front.cells().all(|c| c == Color::White));
    assert!(report.is_complete);
}

#[test]
fn broken_retake_keeps_the_earlier_photo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = solved_config(dir.path());
    std::fs::write(dir.path().join("front_retake.png"), b"truncated").expect("write");
    cfg.faces.push(FaceImageConfig {
        id: FaceId::FRONT,
        image_path: "front_retake.png".into(),
    });

    let (session, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    assert!(!report.faces[0].stale);
    assert!(report.faces[6].error.is_some());
    assert!(!report.faces[6].stale);
    assert!(session.face(FaceId::FRONT).is_validated());
    assert_eq!(
        session.face(FaceId::FRONT).image_ref(),
        Some(report.faces[0].image_path.as_str())
    );
    assert!(report.is_complete);
}

#[test]
fn undecodable_photo_leaves_face_uncaptured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = solved_config(dir.path());
    std::fs::write(dir.path().join("broken.png"), b"not a png").expect("write");
    cfg.faces[4].image_path = "broken.png".into();

    let (session, report) = scan_cube(&cfg, &config_path(dir.path())).expect("scan");

    assert!(report.faces[4].error.is_some());
    assert!(!session.face(FaceId::TOP).is_captured());
    assert_eq!(session.next_face_to_capture(), Some(FaceId::TOP));
    assert_eq!(report.captured, 5);
}

#[test]
fn config_and_report_round_trip_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = solved_config(dir.path());
    let path = config_path(dir.path());
    cfg.write_json(&path).expect("write config");

    let (loaded, _, report) = scan_cube_from_config(&path).expect("scan from config");
    assert_eq!(loaded.faces.len(), 6);

    let out = dir.path().join("report.json");
    report.write_json(&out).expect("write report");
    let raw = std::fs::read_to_string(&out).expect("read report");
    assert!(raw.contains("\"handGesture\""));
    assert!(raw.contains("\"isValid\": true"));

    let back = ScanReport::load_json(&out).expect("load report");
    assert_eq!(back.solution.map(|s| s.len()), Some(STEP_COUNT));
    assert!(back.is_complete);
}

#[test]
fn decoded_photo_validates_directly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_face(dir.path(), "yellow", Color::Yellow, 2);
    let img = load_rgb(dir.path().join(file)).expect("decode");
    let v = validate_face(&img, &FaceValidator::default()).expect("validate");
    assert!(v.is_valid);
    assert!((v.confidence - 7.0 / 9.0).abs() < 1e-6);
}
