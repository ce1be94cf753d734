// SPDX-License-Identifier: MPL-2.0
use folio::catalog::{data, Catalog, CatalogError, CatalogItem};
use folio::config::{self, Config, GeneralConfig, MAX_BATCH_SIZE};
use folio::i18n::fluent::I18n;
use folio::ui::gallery::component;
use folio::ui::gallery::subcomponents::disclosure::{
    DisclosureController, DisclosureState, RevealOutcome,
};
use folio::ui::gallery::subcomponents::preview::{self, PageResources, PreviewOverlay};
use folio::ui::state::BatchSize;
use folio::ui::theming::ThemeMode;
use std::sync::Arc;
use tempfile::tempdir;

fn numbered(ids: std::ops::RangeInclusive<u32>) -> Vec<CatalogItem> {
    ids.map(|id| CatalogItem::new(id, format!("Certificate {id}"), "Test", format!("{id}.png")))
        .collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(loaded_initial_config.general.theme_mode, ThemeMode::Dark);

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn gallery_section_is_clamped_on_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[gallery]\nbatch_size = 500\nreveal_delay_ms = 0\n")
        .expect("write config");

    let loaded = config::load_from_path(&path).expect("valid toml");
    assert_eq!(loaded.gallery.batch_size().value(), MAX_BATCH_SIZE);
    assert!(loaded.gallery.reveal_delay().is_immediate());
}

#[test]
fn bundled_gallery_reveals_whole_archive_in_batches() {
    let catalog = Arc::new(data::archive_catalog().expect("bundled archive is valid"));
    let mut controller =
        DisclosureController::with_seed(catalog, data::seed_certificates(), BatchSize::new(2))
            .expect("bundled seed is valid");
    assert_eq!(controller.count(), 4);

    let mut counts = Vec::new();
    while controller.state() == DisclosureState::Idle {
        let ticket = controller.request_more().expect("idle controller accepts");
        assert!(controller.is_loading());
        controller.complete_reveal(ticket);
        counts.push(controller.count());
    }

    assert_eq!(counts, vec![6, 8, 10, 12, 14, 15]);
    assert!(controller.is_exhausted());
    assert_eq!(controller.request_more(), None);

    let ids: Vec<_> = controller.visible().iter().map(|item| item.id).collect();
    assert_eq!(ids, (1..=15).collect::<Vec<_>>());
}

#[test]
fn overlapping_seed_is_not_revealed_twice() {
    let catalog = Arc::new(Catalog::new(numbered(1..=4)).expect("unique ids"));
    let seed = numbered(2..=3);
    let mut controller =
        DisclosureController::with_seed(catalog, seed, BatchSize::new(5)).expect("unique seed");
    assert_eq!(controller.remaining(), 2);

    let outcome = controller.reveal_now();
    assert_eq!(
        outcome,
        RevealOutcome::Appended {
            count: 2,
            exhausted: true
        }
    );
    let ids: Vec<_> = controller.visible().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 3, 1, 4]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut items = numbered(1..=3);
    items.push(CatalogItem::new(2, "Again", "Test", "again.png"));
    assert_eq!(Catalog::new(items), Err(CatalogError::DuplicateId(2)));
}

#[test]
fn preview_overlay_holds_resources_while_open() {
    let resources = PageResources::new();
    let mut overlay = PreviewOverlay::new(resources.clone());
    let item = CatalogItem::new(1, "One", "Test", "one.png");

    overlay.open(item.clone());
    assert_eq!(overlay.binding(), Some(&item));
    assert!(resources.is_scroll_locked());

    overlay.handle(preview::Message::BackdropPressed);
    assert_eq!(overlay.binding(), None);
    assert!(!resources.is_scroll_locked());
    assert!(!resources.is_listening_for_dismiss());
}

#[test]
fn two_overlays_share_the_scroll_lock() {
    let resources = PageResources::new();
    let mut first = PreviewOverlay::new(resources.clone());
    let mut second = PreviewOverlay::new(resources.clone());
    let item = CatalogItem::new(1, "One", "Test", "one.png");

    first.open(item.clone());
    second.open(item);
    first.handle(preview::Message::CloseRequested);
    assert!(resources.is_scroll_locked());

    drop(second);
    assert!(!resources.is_scroll_locked());
}

#[tokio::test(start_paused = true)]
async fn delayed_reveal_lands_after_timer() {
    let catalog = Arc::new(Catalog::new(numbered(1..=5)).expect("unique ids"));
    let mut controller =
        DisclosureController::from_prefix(catalog, 1, BatchSize::new(2)).expect("valid seed");

    let ticket = controller.request_more().expect("idle controller accepts");
    let start = tokio::time::Instant::now();
    let fired = component::wait_for_reveal(std::time::Duration::from_millis(800), ticket).await;
    assert!(start.elapsed() >= std::time::Duration::from_millis(800));

    controller.complete_reveal(fired);
    assert_eq!(controller.count(), 3);
    assert_eq!(controller.state(), DisclosureState::Idle);
}
