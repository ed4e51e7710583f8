use loadcenter_core::core::PanelStore;
use loadcenter_core::layout::compute_columns;
use loadcenter_core::types::{BreakerType, Config, PanelSettings};
use tempfile::TempDir;

fn open_store() -> (PanelStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        base_path: temp_dir.path().to_path_buf(),
    };
    let store = PanelStore::open(&config).unwrap();
    (store, temp_dir)
}

fn reopen_store(temp_dir: &TempDir) -> PanelStore {
    let config = Config {
        base_path: temp_dir.path().to_path_buf(),
    };
    PanelStore::open(&config).unwrap()
}

#[test]
fn test_first_run_setup_flow() {
    let (mut store, temp) = open_store();
    assert!(!store.is_setup_complete().unwrap());

    let settings = PanelSettings {
        service_rating: 200,
        breaker_count: 20,
        spaces: 24,
    };
    store.check_settings(&settings).unwrap();
    store.save_settings(&settings).unwrap();
    store.initialize_breakers(settings.breaker_count).unwrap();

    assert!(store.is_setup_complete().unwrap());

    // Everything survives a process restart.
    let store = reopen_store(&temp);
    assert_eq!(store.settings().unwrap(), Some(settings));
    let breakers = store.breakers().unwrap();
    assert_eq!(breakers.len(), 20);
    assert_eq!(breakers[0].breaker_type, BreakerType::Main);
}

#[test]
fn test_edits_persist_across_reopen() {
    let (mut store, temp) = open_store();
    store.initialize_breakers(8).unwrap();

    store.toggle_breaker(3).unwrap();
    let mut edited = store.breakers().unwrap()[4].clone();
    edited.name = "Dryer".to_string();
    edited.amperage = 30;
    edited.breaker_type = BreakerType::DoublePole;
    store.update_breaker(&edited).unwrap();
    store.swap_positions(1, 2).unwrap();

    let store = reopen_store(&temp);
    let breakers = store.breakers().unwrap();
    assert!(!breakers.iter().find(|b| b.id == 3).unwrap().is_on);
    assert_eq!(breakers[4], edited);
    assert_eq!(breakers[0].position, 2);
    assert_eq!(breakers[1].position, 1);
}

#[test]
fn test_panel_resize_flow() {
    let (mut store, _temp) = open_store();

    let settings = PanelSettings {
        service_rating: 200,
        breaker_count: 10,
        spaces: 24,
    };
    store.save_settings(&settings).unwrap();
    store.initialize_breakers(settings.breaker_count).unwrap();

    // Growing the panel appends default breakers.
    let grown = PanelSettings {
        breaker_count: 14,
        ..settings
    };
    store.check_settings(&grown).unwrap();
    store.save_settings(&grown).unwrap();
    assert_eq!(store.breakers().unwrap().len(), 14);

    // Shrinking truncates the stored tail.
    let shrunk = PanelSettings {
        breaker_count: 6,
        ..settings
    };
    store.save_settings(&shrunk).unwrap();
    let breakers = store.breakers().unwrap();
    assert_eq!(breakers.len(), 6);
    assert_eq!(breakers[0].breaker_type, BreakerType::Main);
}

#[test]
fn test_shrinking_spaces_below_breakers_is_rejected() {
    let (mut store, _temp) = open_store();
    store.initialize_breakers(10).unwrap();

    let settings = PanelSettings {
        service_rating: 200,
        breaker_count: 8,
        spaces: 8,
    };
    assert!(store.check_settings(&settings).is_err());
}

#[test]
fn test_clear_all_returns_to_setup_flow() {
    let (mut store, temp) = open_store();
    store
        .save_settings(&PanelSettings {
            service_rating: 100,
            breaker_count: 4,
            spaces: 12,
        })
        .unwrap();
    store.initialize_breakers(4).unwrap();

    store.clear_all().unwrap();

    let store = reopen_store(&temp);
    assert!(!store.is_setup_complete().unwrap());
    assert!(store.settings().unwrap().is_none());
    assert!(store.breakers().unwrap().is_empty());
}

#[test]
fn test_layout_recomputed_from_stored_state() {
    let (mut store, _temp) = open_store();

    let settings = PanelSettings {
        service_rating: 200,
        breaker_count: 12,
        spaces: 12,
    };
    store.save_settings(&settings).unwrap();
    let breakers = store.initialize_breakers(settings.breaker_count).unwrap();

    // Main (2) + 11 singles = 13 spaces across both columns.
    let layout = compute_columns(&breakers, settings.spaces);
    assert_eq!(layout.left_used + layout.right_used, 13);
    assert_eq!(layout.left.len() + layout.right.len(), 12);
    assert_eq!(layout.left_used, 6);

    // A toggle does not move anything; the layout derives only from
    // positions and widths.
    let toggled = store.toggle_breaker(2).unwrap();
    let after = compute_columns(&toggled, settings.spaces);
    let ids = |column: &[loadcenter_core::types::Breaker]| {
        column.iter().map(|b| b.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&layout.left), ids(&after.left));
    assert_eq!(ids(&layout.right), ids(&after.right));
}
