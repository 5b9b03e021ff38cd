//! End-to-end reader scenarios through the public API.
//!
//! Covers the paths a host exercises: configuring palettes from TOML, opening a
//! document, scrolling and dragging the outline, and bookmarks surviving a
//! reopen through the file-backed store.

use docmap::config::{load_config_file, merge_config};
use docmap::model::{NodeId, NodeKind};
use docmap::state::{
    BookmarkError, BookmarkStore, Document, FileStore, MemoryStore, NodeSpec, Reader,
    ReaderError, ReaderSettings,
};
use docmap::view_state::{PointerSource, VisibleArea};
use std::fs;
use std::path::PathBuf;

fn id(raw: &str) -> NodeId {
    NodeId::new(raw).unwrap()
}

/// Eight 500px nodes: two unsectioned lead-ins, then three sections of two.
fn report() -> Document {
    Document::new(
        "Quarterly Report",
        vec![
            NodeSpec::new(id("title"), NodeKind::Body, 500),
            NodeSpec::new(id("byline"), NodeKind::Body, 500),
            NodeSpec::new(id("summary"), NodeKind::SectionStart, 500),
            NodeSpec::new(id("summary-body"), NodeKind::Body, 500),
            NodeSpec::new(id("figures"), NodeKind::SectionStart, 500),
            NodeSpec::new(id("figures-body"), NodeKind::Body, 500),
            NodeSpec::new(id("outlook"), NodeKind::SectionStart, 500),
            NodeSpec::new(id("outlook-body"), NodeKind::Body, 500),
        ],
    )
    .unwrap()
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("docmap_it_{name}"));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn palettes_from_config_color_sections() {
    let dir = scratch("config_palettes");
    fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("config.toml");
    fs::write(
        &config_path,
        r##"
default_color = "#000"

[[palettes]]
name = "warm"
colors = ["#F00", "#F80"]

[[palettes]]
name = "cool"
colors = ["#00F"]
"##,
    )
    .unwrap();

    let settings = merge_config(load_config_file(&config_path).unwrap())
        .reader_settings()
        .unwrap();
    let mut reader = Reader::new(report(), settings, MemoryStore::new(), 1000.0).unwrap();
    reader.start().unwrap();

    let colors: Vec<String> = reader
        .outline()
        .nodes()
        .iter()
        .map(|n| n.color.as_ref().map(|c| c.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(
        colors,
        vec!["#000", "#000", "#F00", "#F00", "#00F", "#00F", "#F80", "#F80"]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn scroll_and_drag_track_the_viewport() {
    let mut reader =
        Reader::new(report(), ReaderSettings::default(), MemoryStore::new(), 1000.0).unwrap();
    reader.start().unwrap();

    // 4000px in a 1000px window: scale 4, boxes of 125 with a 1px gap.
    assert_eq!(reader.outline().nodes()[1].top, 125.0);
    assert_eq!(reader.outline().nodes()[1].height, 124.0);
    assert_eq!(
        reader.outline().visible_area(),
        Some(VisibleArea {
            top: 0.0,
            height: 250.0
        })
    );

    reader.on_scroll(2000.0);
    assert_eq!(reader.outline().visible_area().map(|a| a.top), Some(500.0));
    assert_eq!(reader.current_section(), Some(&id("figures")));

    // Grab the indicator 50px below its top and drag it up to the outline top.
    let outcome = reader.pointer_down(PointerSource::IndicatorHandle, 550.0);
    assert!(outcome.consumed);
    assert_eq!(outcome.scroll, None);
    assert!(reader.outline().is_dragging());

    assert_eq!(reader.pointer_move(150.0), Some(400.0));
    assert_eq!(reader.outline().visible_area().map(|a| a.top), Some(100.0));

    reader.pointer_up();
    assert!(!reader.outline().is_dragging());
    assert_eq!(reader.pointer_move(700.0), None);
    assert_eq!(reader.scroll_top(), 400.0);
}

#[test]
fn bookmarks_survive_reopen_through_file_store() {
    let dir = scratch("reopen");
    let store_path = dir.join("bookmarks.json");

    {
        let mut reader = Reader::new(
            report(),
            ReaderSettings::default(),
            FileStore::new(&store_path),
            1000.0,
        )
        .unwrap();
        reader.start().unwrap();
        assert!(reader.toggle_bookmark(&id("figures")).unwrap());
        assert!(reader.toggle_bookmark(&id("outlook-body")).unwrap());
        assert!(!reader.toggle_bookmark(&id("outlook-body")).unwrap());
    }

    let mut reopened = Reader::new(
        report(),
        ReaderSettings::default(),
        FileStore::new(&store_path),
        1000.0,
    )
    .unwrap();
    reopened.start().unwrap();

    assert!(reopened.state().is_bookmarked(&id("figures")));
    assert!(!reopened.state().is_bookmarked(&id("outlook-body")));

    let highlighted: Vec<&str> = reopened
        .outline()
        .nodes()
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(highlighted, vec!["figures"]);

    let line = reopened.bookmark_line();
    assert_eq!(line[4].icon_color.as_ref().map(|c| c.as_str()), Some("white"));
    assert_eq!(line[5].icon_color, line[5].stripe_color);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn bookmarks_are_keyed_by_document_title() {
    let dir = scratch("titles");
    let store_path = dir.join("bookmarks.json");

    let mut reader = Reader::new(
        report(),
        ReaderSettings::default(),
        FileStore::new(&store_path),
        1000.0,
    )
    .unwrap();
    reader.start().unwrap();
    reader.toggle_bookmark(&id("summary")).unwrap();

    let store = FileStore::new(&store_path);
    assert!(store.get("Quarterly Report").unwrap().is_some());
    assert_eq!(store.get("Annual Report").unwrap(), None);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_store_file_is_reported() {
    let dir = scratch("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let store_path = dir.join("bookmarks.json");
    fs::write(&store_path, "not json").unwrap();

    let err = Reader::new(
        report(),
        ReaderSettings::default(),
        FileStore::new(&store_path),
        1000.0,
    )
    .unwrap_err();

    assert!(matches!(err, ReaderError::Bookmark(BookmarkError::Store(_))));

    let _ = fs::remove_dir_all(&dir);
}
