#[allow(dead_code)]
mod common;

use turntable_core::color::ColorOption;
use turntable_core::config::ViewerConfig;
use turntable_core::consts::UNAVAILABLE_MESSAGE;
use turntable_core::executor::{drive_to_completion, ProbeExecutor};
use turntable_core::loader::loader_for_base;
use turntable_core::navigation::NavKey;
use turntable_core::source::normalize_product_id;
use turntable_core::surface::SurfaceView;
use turntable_core::viewer::{FrameViewer, ViewerPhase};

use common::write_frame_tree;

/// Product file on disk, frames in a local tree, three colors: one
/// auto-detected, one with an explicit list that has a hole, one with no
/// frames at all.
#[test]
fn test_full_session_from_product_file() {
    let dir = tempfile::tempdir().unwrap();
    let product_dir = normalize_product_id("roadster-s-2");
    assert_eq!(product_dir, "roadster_s_2");

    write_frame_tree(dir.path(), &product_dir, "white", &[0, 1, 2, 5]);
    write_frame_tree(dir.path(), &product_dir, "black", &[0, 3]);

    let base = dir.path().to_string_lossy().to_string();
    let config = ViewerConfig::new(
        "roadster-s-2",
        vec![
            ColorOption::new("white", "Pearl White", "#f4f4f4").with_background("#202020"),
            ColorOption::new("black", "Jet Black", "#111111").with_frames(vec![3, 0, 6]),
            ColorOption::new("green", "Moss Green", "#4a5d23"),
        ],
    )
    .with_base_url(base.clone())
    .with_total_frames(6);

    let product_file = dir.path().join("roadster.toml");
    std::fs::write(&product_file, config.to_toml_string().unwrap()).unwrap();
    let config = ViewerConfig::load(&product_file).unwrap();

    let executor = ProbeExecutor::new(loader_for_base(&base).unwrap(), 3).unwrap();
    let mut viewer = FrameViewer::new(&config).unwrap();

    // Default color
    let requests = viewer.start();
    assert_eq!(requests.len(), 6);
    let phase = drive_to_completion(&mut viewer, &executor, requests, |_| {});
    assert_eq!(phase, ViewerPhase::Ready);
    assert_eq!(viewer.available().to_vec(), vec![0, 1, 2, 5]);
    assert_eq!(viewer.current_frame(), Some(0));
    assert_eq!(viewer.view(), SurfaceView::Frames { current: Some(0) });

    viewer.key(NavKey::ArrowLeft);
    assert_eq!(viewer.current_frame(), Some(5));
    viewer.slider_seek(0.5);
    assert_eq!(viewer.current_frame(), Some(1));

    // Explicit list with a missing file
    let requests = viewer.select_color_id("black").unwrap();
    assert_eq!(requests.len(), 3);
    drive_to_completion(&mut viewer, &executor, requests, |_| {});
    assert_eq!(viewer.available().to_vec(), vec![0, 3]);
    let current = viewer.current_frame().unwrap();
    assert!(viewer.available().contains(current));

    // Nothing on disk
    let requests = viewer.select_color_id("green").unwrap();
    let phase = drive_to_completion(&mut viewer, &executor, requests, |_| {});
    assert_eq!(phase, ViewerPhase::Empty);
    assert_eq!(
        viewer.view(),
        SurfaceView::Unavailable {
            color_name: "Moss Green".to_string()
        }
    );
    assert!(UNAVAILABLE_MESSAGE.contains("not available"));

    // Back to the first color: everything is cached
    let requests = viewer.select_color_id("white").unwrap();
    assert!(requests.is_empty());
    assert_eq!(viewer.phase(), ViewerPhase::Ready);
    assert_eq!(viewer.available().to_vec(), vec![0, 1, 2, 5]);
    assert_eq!(viewer.current_frame(), Some(0));
    assert_eq!(viewer.cache().len_loaded("white"), 4);
}
