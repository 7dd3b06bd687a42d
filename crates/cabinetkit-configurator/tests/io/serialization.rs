use std::sync::Arc;

use cabinetkit_configurator::model::*;
use cabinetkit_configurator::serialization::{ConfigSnapshot, SNAPSHOT_FORMAT_VERSION};
use cabinetkit_configurator::session::{ConfiguratorSession, SessionOptions};
use cabinetkit_core::{Category, ModuleCatalog, ModuleType};

fn sample_session() -> ConfiguratorSession {
    let mut session = ConfiguratorSession::default();
    let corner = session.add_module_slot(ModuleType::CornerBase).unwrap();
    session
        .set_module_options(
            &corner,
            ModuleOptions {
                hinge: Some(HingeSide::Right),
                shelf_count: Some(1),
            },
        )
        .unwrap();
    session.add_slot(Category::Overhead, 600).unwrap();
    let empty = session.add_slot(Category::Base, 600).unwrap();
    session.clear_slot(&empty).unwrap();
    session.set_finish(FinishField::Material, "POL-NOWM").unwrap();
    session
}

#[test]
fn test_create_snapshot() {
    let session = ConfiguratorSession::default();
    let snapshot = session.snapshot("Galley");
    assert_eq!(snapshot.format_version, SNAPSHOT_FORMAT_VERSION);
    assert_eq!(snapshot.name, "Galley");
    assert_eq!(&snapshot.config, session.config());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galley.json");

    let session = sample_session();
    let snapshot = session.snapshot("Galley");
    snapshot.save_to_file(&path).unwrap();

    let loaded = ConfigSnapshot::load_from_file(&path).unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.config.slots[1].content, SlotContent::Undecided);
    assert_eq!(loaded.config.slots[2].content, SlotContent::Empty);
}

#[test]
fn test_json_shape() {
    let snapshot = sample_session().snapshot("Galley");
    let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

    assert_eq!(value["format_version"], 1);
    assert_eq!(value["config"]["dimensions"]["width"], 2400);
    let slot = &value["config"]["slots"][0];
    assert_eq!(slot["category"], "base");
    assert_eq!(slot["content"]["state"], "module");
    assert_eq!(slot["content"]["module_type"], "corner-base");
    assert_eq!(slot["content"]["options"]["hinge"], "right");
    assert_eq!(value["config"]["slots"][2]["content"]["state"], "empty");
    assert_eq!(value["config"]["finish"]["material"], "POL-NOWM");
}

#[test]
fn test_unsupported_version_rejected() {
    let snapshot = sample_session().snapshot("Galley");
    let mut value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    value["format_version"] = serde_json::json!(SNAPSHOT_FORMAT_VERSION + 1);

    let err = ConfigSnapshot::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("Unsupported snapshot format version"));
}

#[test]
fn test_inconsistent_snapshot_rejected() {
    let snapshot = sample_session().snapshot("Galley");
    let mut value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    // A base module in an overhead slot.
    value["config"]["slots"][0]["category"] = serde_json::json!("overhead");

    let err = ConfigSnapshot::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("inconsistent"));
}

#[test]
fn test_snapshot_with_invalid_module_options_rejected() {
    let mut session = ConfiguratorSession::default();
    let slot = session.add_module_slot(ModuleType::Standard).unwrap();
    let rejected = ModuleOptions {
        hinge: Some(HingeSide::Right),
        shelf_count: Some(200),
    };
    assert!(session.set_module_options(&slot, rejected).is_err());

    let mut snapshot = session.snapshot("Galley");
    let SlotContent::Module(module) = &mut snapshot.config.slots[0].content else {
        panic!("expected a module in the first slot");
    };
    module.options = rejected;

    let err = ConfigSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap_err();
    assert!(err.to_string().contains("inconsistent"));

    let reopened = ConfiguratorSession::from_snapshot(
        Arc::new(ModuleCatalog::standard()),
        SessionOptions::default(),
        snapshot,
    );
    assert!(reopened.is_err());
}

#[test]
fn test_malformed_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(ConfigSnapshot::load_from_file(&path).is_err());
    assert!(ConfigSnapshot::load_from_file(dir.path().join("missing.json")).is_err());
}
