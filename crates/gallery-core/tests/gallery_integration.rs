//! End-to-end gallery tests
//!
//! Drive the core against a real directory on disk: load the dataset, filter
//! it, open the overlay, list the archive and save a download.

use std::io::{Cursor, Write};
use std::path::Path;

use gallery_core::archive::{self, ArchiveListing};
use gallery_core::download;
use gallery_core::loader;
use gallery_core::{
    AppState, AssetSource, Facet, FetchResponse, GalleryConfig, GalleryError, GridView,
    LoadState, OverlayPhase, Severity,
};

const DATASET: &str = r#"{
    "characters": [
        {"id": "1", "name": "Aela", "path": "Hunt", "element": "Wind"},
        {"id": "2", "name": "Bron", "path": "Erudition", "element": "Ice"}
    ]
}"#;

fn write_zip(path: &Path, entries: &[&str]) {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for name in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(b"payload").unwrap();
        }
    }
    let bytes = writer.finish().unwrap().into_inner();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// Site directory with the dataset and one archive for character 1
fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/characters.json"), DATASET).unwrap();
    write_zip(
        &dir.path().join("models/1.zip"),
        &["aela/", "aela/aela.pmx", "aela/tex/body.png", "readme.txt"],
    );
    write_zip(&dir.path().join("models/2.zip"), &[]);
    dir
}

async fn loaded_state(dir: &Path) -> AppState<&'static str> {
    let config = GalleryConfig::default();
    let source = AssetSource::directory(dir);
    let mut state = AppState::new(config.clone(), source.clone());
    state.loaded(loader::load(&source, &config.dataset_path).await);
    state
}

fn visible_ids(state: &AppState<&'static str>) -> Vec<String> {
    state.filtered().iter().map(|c| c.id.clone()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[tokio::test]
async fn test_search_facet_and_clear_scenario() {
    let dir = site();
    let mut state = loaded_state(dir.path()).await;
    assert_eq!(state.load_state(), &LoadState::Ready);

    let t = state.input_search("ael");
    state.commit(t);
    assert_eq!(visible_ids(&state), vec!["1"]);

    let t = state.select(Facet::Path, "Erudition");
    state.commit(t);
    assert!(visible_ids(&state).is_empty());
    assert_eq!(state.grid_view(), GridView::NoResults);

    let t = state.clear_filters();
    state.commit(t);
    assert_eq!(visible_ids(&state), vec!["1", "2"]);
    assert!(state.filter().path.is_empty());
    assert!(state.filter().element.is_empty());
}

#[tokio::test]
async fn test_options_derived_after_load() {
    let dir = site();
    let state = loaded_state(dir.path()).await;
    let paths: Vec<&str> = state
        .options()
        .for_facet(Facet::Path)
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(paths, vec!["", "Erudition", "Hunt"]);
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_missing_dataset_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(dir.path()).await;
    match state.grid_view() {
        GridView::LoadFailed(msg) => assert!(msg.contains("404")),
        other => panic!("expected load failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_dataset_is_distinct_from_no_results() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/characters.json"), "[]").unwrap();

    let mut state = loaded_state(dir.path()).await;
    assert_eq!(state.grid_view(), GridView::DatasetEmpty);

    let t = state.input_search("zzz");
    state.commit(t);
    assert_eq!(state.grid_view(), GridView::DatasetEmpty);
}

// ============================================================================
// Overlay + archive
// ============================================================================

#[tokio::test]
async fn test_overlay_lists_archive_files_only() {
    let dir = site();
    let mut state = loaded_state(dir.path()).await;

    let generation = state.open_character("1", Some("card-1")).unwrap();
    state.activate_overlay(&[]);
    let locator = state.detail_view().unwrap().archive_locator;

    let result = archive::list_entries(&state.source, &locator).await;
    assert!(state.archive_loaded(generation, result));
    assert_eq!(
        state.archive(),
        &ArchiveListing::Entries(vec![
            "aela/aela.pmx".to_string(),
            "aela/tex/body.png".to_string(),
            "readme.txt".to_string(),
        ])
    );

    let close = state.close_overlay().unwrap();
    assert_eq!(state.finalize_overlay(close), Some("card-1"));
    assert_eq!(state.overlay().phase(), OverlayPhase::Closed);
}

#[tokio::test]
async fn test_empty_archive_is_not_an_error() {
    let dir = site();
    let source = AssetSource::directory(dir.path());
    let listing = ArchiveListing::from_result(archive::list_entries(&source, "models/2.zip").await);
    assert_eq!(listing, ArchiveListing::Empty);
}

#[tokio::test]
async fn test_non_success_archive_reports_status() {
    let source = AssetSource::fixtures([(
        "models/9.zip".to_string(),
        FetchResponse::with_status(403),
    )]);
    let err = archive::list_entries(&source, "models/9.zip").await.unwrap_err();
    assert!(matches!(err, GalleryError::Fetch { status: 403, .. }));

    match ArchiveListing::from_result(Err(err)) {
        ArchiveListing::Failed(msg) => assert!(msg.contains("403")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_archive_with_wrong_content_type_still_decodes() {
    let dir = site();
    let bytes = std::fs::read(dir.path().join("models/1.zip")).unwrap();
    let source = AssetSource::fixtures([(
        "m.zip".to_string(),
        FetchResponse {
            status: 200,
            content_type: Some("text/html".to_string()),
            body: bytes.into(),
        },
    )]);
    assert_eq!(archive::list_entries(&source, "m.zip").await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_card_only_notifies() {
    let dir = site();
    let mut state = loaded_state(dir.path()).await;
    assert!(state.open_character("ghost", Some("card-x")).is_none());
    assert!(!state.overlay().is_mounted());
    assert_eq!(state.notifications().len(), 1);
    assert_eq!(state.notifications().items()[0].severity, Severity::Error);
}

// ============================================================================
// Downloads
// ============================================================================

#[tokio::test]
async fn test_download_saves_archive() {
    let dir = site();
    let mut state = loaded_state(dir.path()).await;
    let plan = state.plan_download(None, Some("1"), "Aela").unwrap();
    assert_eq!(plan.file_name, "aela_1.zip");

    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join(&plan.file_name);
    let saved = download::save_download(&state.source, &plan, &dest).await.unwrap();
    assert_eq!(
        std::fs::read(saved).unwrap(),
        std::fs::read(dir.path().join("models/1.zip")).unwrap()
    );
}

#[tokio::test]
async fn test_download_of_missing_archive_fails_cleanly() {
    let dir = site();
    let state = loaded_state(dir.path()).await;
    let plan = download::plan_download(state.collection(), Some("models/404.zip"), Some("1"), "Aela").unwrap();

    let out = tempfile::tempdir().unwrap();
    let err = download::save_download(&state.source, &plan, &out.path().join("x.zip"))
        .await
        .unwrap_err();
    assert!(matches!(err, GalleryError::DownloadInitiation(_)));
    assert!(!out.path().join("x.zip").exists());
}

#[tokio::test]
async fn test_unnamed_and_duplicate_records_download_their_own_archive() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data/characters.json"),
        r#"[{"id":"1","name":"Aela"},{"id":"7"},{"id":"8","name":"Aela"}]"#,
    )
    .unwrap();
    write_zip(&dir.path().join("models/7.zip"), &["seven.pmx"]);
    write_zip(&dir.path().join("models/8.zip"), &["eight.pmx", "eight.png"]);

    let mut state = loaded_state(dir.path()).await;
    let out = tempfile::tempdir().unwrap();

    let unnamed = state.plan_download(None, Some("7"), "Unknown Character").unwrap();
    assert_eq!(unnamed.file_name, "unknown_character_7.zip");
    let saved = download::save_download(&state.source, &unnamed, &out.path().join(&unnamed.file_name))
        .await
        .unwrap();
    assert_eq!(archive::entries_from_bytes(&std::fs::read(saved).unwrap()).unwrap(), vec!["seven.pmx"]);

    let second = state.plan_download(Some("models/8.zip"), Some("8"), "Aela").unwrap();
    assert_eq!(second.file_name, "aela_8.zip");
    let saved = download::save_download(&state.source, &second, &out.path().join(&second.file_name))
        .await
        .unwrap();
    assert_eq!(
        archive::entries_from_bytes(&std::fs::read(saved).unwrap()).unwrap(),
        vec!["eight.pmx", "eight.png"]
    );
}

// ============================================================================
// Loose dataset typing
// ============================================================================

#[tokio::test]
async fn test_numeric_ids_and_mistyped_fields_still_render() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data/characters.json"),
        r#"{"characters":[
            {"id":1,"name":"Aela","rarity":"5","path":"Hunt"},
            {"id":2,"name":"Bron","rarity":300,"element":false}
        ]}"#,
    )
    .unwrap();

    let mut state = loaded_state(dir.path()).await;
    assert_eq!(state.collection().len(), 2);

    let GridView::Cards(cards) = state.grid_view() else {
        panic!("expected cards, got {:?}", state.grid_view());
    };
    assert_eq!(cards[0].id, "1");
    assert_eq!(cards[0].rarity.as_deref(), Some("★★★★★"));
    assert_eq!(cards[1].rarity, None);
    assert_eq!(cards[1].element, None);

    let generation = state.open_character("2", Some("card-2"));
    assert!(generation.is_some());
    assert_eq!(state.detail_view().unwrap().archive_locator, "models/2.zip");
}

#[tokio::test]
async fn test_overlay_controls_do_not_outlive_the_session() {
    let dir = site();
    let mut state = loaded_state(dir.path()).await;

    let generation = state.open_character("1", Some("card-1")).unwrap();
    state.overlay_mut().register_control(0, "close");
    state.overlay_mut().register_control(1, "download");
    let descriptors = state.overlay().control_focusables();
    state.activate_overlay(&descriptors);
    assert!(state.overlay().traps_tab());

    let next = state.overlay_mut().trap_mut().and_then(|t| t.next(false));
    assert_eq!(next.and_then(|i| state.overlay().control(i).copied()), Some("close"));

    state.close_overlay();
    assert_eq!(state.overlay_transition_ended(generation, "transform"), None);
    assert_eq!(state.overlay().phase(), OverlayPhase::Closing);
    assert_eq!(
        state.overlay_transition_ended(generation, "opacity"),
        Some("card-1")
    );

    assert!(!state.overlay().traps_tab());
    assert_eq!(state.overlay().control(0), None);
    assert!(!state.overlay_mut().register_control(0, "close"));
}
