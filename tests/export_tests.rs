//! SVG export: document shape, determinism and the no-overwrite naming policy.

mod common;

use std::fs;
use std::path::PathBuf;

use common::{gradient, scratch_dir, solid};
use dot_mosaic::export::{candidate_path, export_path, render_document, write_document};
use dot_mosaic::{export_svg, ControlState, Divisor, Error, FigureKind};

fn state(kind: FigureKind) -> ControlState {
    ControlState::new(kind, 5, 4.0).with_shift(true)
}

#[test]
fn same_input_gives_byte_identical_documents() {
    let img = gradient(31, 19);
    for kind in FigureKind::ALL {
        let (first, _) = render_document(&img, &state(kind), Divisor::Nominal);
        let (second, _) = render_document(&img, &state(kind), Divisor::Nominal);
        assert_eq!(first.to_markup(), second.to_markup());
    }
}

#[test]
fn document_has_one_element_per_figure_and_margin_header() {
    let img = solid(10, 10, [0, 0, 0]);
    let controls = ControlState::new(FigureKind::Circle, 5, 4.0);
    let (document, stats) = render_document(&img, &controls, Divisor::Nominal);
    let markup = document.to_markup();

    assert_eq!(stats.figures, 4);
    assert_eq!(markup.matches("<circle").count(), 4);
    assert!(markup.contains("viewBox=\"-4 -4 18 18\""));
    assert!(markup.contains("width=\"18\""));
    assert!(markup.contains("fill=\"#000000\""));
}

#[test]
fn export_writes_primary_path_then_suffixes() {
    let dir = scratch_dir("suffix");
    let img = solid(10, 10, [0, 0, 0]);
    let base = export_path(&dir, &PathBuf::from("/photos/cat.png"));

    let (first, _) = export_svg(&img, &state(FigureKind::Star), Divisor::Nominal, &base, 3).unwrap();
    let (second, _) = export_svg(&img, &state(FigureKind::Star), Divisor::Nominal, &base, 3).unwrap();
    let (third, _) = export_svg(&img, &state(FigureKind::Star), Divisor::Nominal, &base, 3).unwrap();

    assert_eq!(first, dir.join("cat.svg"));
    assert_eq!(second, dir.join("cat_1.svg"));
    assert_eq!(third, dir.join("cat_2.svg"));

    let written = fs::read_to_string(&first).unwrap();
    let (document, _) = render_document(&img, &state(FigureKind::Star), Divisor::Nominal);
    assert_eq!(written, document.to_markup());
    assert_eq!(fs::read_to_string(&second).unwrap(), written);
}

#[test]
fn exhausted_names_fail_without_overwriting() {
    let dir = scratch_dir("exhausted");
    let base = dir.join("pic.svg");
    for n in 0..=2 {
        fs::write(candidate_path(&base, n), "keep me").unwrap();
    }

    let img = solid(4, 4, [0, 0, 0]);
    let (document, _) = render_document(&img, &state(FigureKind::Circle), Divisor::Nominal);
    let err = write_document(&document, &base, 2).unwrap_err();

    assert!(matches!(err, Error::ExportExhausted { attempts: 2, .. }));
    for n in 0..=2 {
        assert_eq!(fs::read_to_string(candidate_path(&base, n)).unwrap(), "keep me");
    }
    assert!(!candidate_path(&base, 3).exists());
}

#[test]
fn missing_directory_is_reported() {
    let dir = scratch_dir("missing").join("not").join("there");
    let img = solid(4, 4, [0, 0, 0]);
    let (document, _) = render_document(&img, &state(FigureKind::Rhombus), Divisor::Nominal);
    let err = write_document(&document, &dir.join("pic.svg"), 5).unwrap_err();
    assert!(matches!(err, Error::Export { .. }));
}
