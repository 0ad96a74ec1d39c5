//! Integration tests for loading art from disk

use std::fs;

use tempfile::TempDir;
use veggie::art::Resources;
use veggie::{ArtError, ArtStore, Figure, Orientation};

const NAMES: &[&str] = &[
    "cucumber",
    "cucumber-reverse",
    "eggplant",
    "eggplant-reverse",
];

fn art_dir(skip: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in NAMES {
        if Some(*name) == skip {
            continue;
        }
        let body = format!("[{}]\n\n  ||\n\n\n", name);
        fs::write(dir.path().join(format!("{}.txt", name)), body).unwrap();
    }
    dir
}

#[test]
fn store_loads_every_variant_from_directory() {
    let dir = art_dir(None);
    let store = ArtStore::load(&Resources::dir(dir.path())).unwrap();

    let art = store.get(Figure::Cucumber, Orientation::Reverse);
    assert_eq!(art.lines(), &["[cucumber-reverse]", "", "  ||"]);
    assert_eq!(art.height(), 3);
}

#[test]
fn missing_resource_is_reported_by_name() {
    let dir = art_dir(Some("cucumber-reverse"));
    let err = ArtStore::load(&Resources::dir(dir.path())).unwrap_err();

    assert!(matches!(err, ArtError::ResourceUnavailable { .. }));
    assert_eq!(err.resource_name(), "cucumber-reverse");

    let report = format!("{:#}", anyhow::Error::from(err));
    assert!(report.contains("cucumber-reverse"));
}
