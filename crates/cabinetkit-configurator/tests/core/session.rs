use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use cabinetkit_configurator::model::*;
use cabinetkit_configurator::session::{ChangeKind, ConfiguratorSession, SessionOptions};
use cabinetkit_configurator::wizard::{StepIssue, WizardStep};
use cabinetkit_core::{
    Axis, Category, DoorProfileRecord, MaterialRecord, ModuleCatalog, ModulePriceRecord,
    ModuleType, PriceTables,
};

fn session() -> ConfiguratorSession {
    ConfiguratorSession::default()
}

#[test]
fn test_undo_restores_previous_state() {
    let mut session = session();
    let original = session.current();

    session
        .set_dimensions(CabinetDimensions::new(3000, 900, 600))
        .unwrap();
    assert!(session.can_undo());
    assert_eq!(session.history().undo_label(), Some("Set dimensions"));

    assert!(session.undo());
    assert!(Arc::ptr_eq(&session.current(), &original));
    assert!(session.can_redo());

    assert!(session.redo());
    assert_eq!(session.config().dimensions.width, 3000);
    assert!(!session.redo());
}

#[test]
fn test_rejected_edit_records_no_history() {
    let mut session = session();
    let err = session
        .set_dimensions(CabinetDimensions::new(0, 900, 600))
        .unwrap_err();
    assert!(err.is_validation_error());
    assert!(!session.can_undo());
    assert!(!session.undo());
}

#[test]
fn test_new_edit_discards_redo() {
    let mut session = session();
    session.set_finish(FinishField::Material, "OAK-NAT").unwrap();
    session.set_finish(FinishField::Material, "POL-NOWM").unwrap();
    assert!(session.undo());
    assert!(session.can_redo());

    session.set_finish(FinishField::Hardware, "PULL-BAR").unwrap();
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(session.config().finish.material, "OAK-NAT");
}

#[test]
fn test_history_depth_from_options() {
    let options = SessionOptions {
        history_depth: 3,
        ..SessionOptions::default()
    };
    let mut session = ConfiguratorSession::new(Arc::new(ModuleCatalog::standard()), options);
    for delta in 1..=5 {
        session.nudge_dimension(Axis::Height, delta).unwrap();
    }
    let mut undone = 0;
    while session.undo() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    // The two oldest edits can no longer be undone.
    assert_eq!(session.config().dimensions.height, 903);
}

#[test]
fn test_add_module_slot_is_one_step() {
    let mut session = session();
    let slot = session.add_module_slot(ModuleType::PantryPullout).unwrap();

    let added = session.config().slot(&slot).cloned().unwrap();
    assert_eq!(added.category, Category::Base);
    assert_eq!(added.width, 300);
    assert_eq!(added.module().unwrap().module_type, ModuleType::PantryPullout);
    assert_eq!(session.history().undo_depth(), 1);
    assert_eq!(session.history().undo_label(), Some("Add module"));

    assert!(session.undo());
    assert!(session.config().slots.is_empty());
}

#[test]
fn test_failed_add_module_slot_leaves_nothing_behind() {
    let mut session = session();
    session
        .set_dimensions(CabinetDimensions::new(600, 900, 600))
        .unwrap();
    session.add_module_slot(ModuleType::Standard).unwrap();

    assert!(session.add_module_slot(ModuleType::SinkBase).is_err());
    assert_eq!(session.config().slots.len(), 1);
    assert_eq!(session.history().undo_depth(), 2);
}

#[test]
fn test_listener_sees_every_change() {
    let mut session = session();
    let seen: Rc<RefCell<Vec<(u64, ChangeKind)>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let handle = session.subscribe(move |config: &Arc<CabinetConfig>, change: &ChangeKind| {
        sink.borrow_mut().push((config.revision, change.clone()));
    });

    let slot = session.add_slot(Category::Overhead, 600).unwrap();
    session.assign_module(&slot, ModuleType::WallGlass).unwrap();
    assert!(session.assign_module(&slot, ModuleType::SinkBase).is_err());
    session.undo();
    session.redo();

    {
        let seen = seen.borrow();
        let kinds: Vec<&ChangeKind> = seen.iter().map(|(_, kind)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                &ChangeKind::Edit("Add slot".to_string()),
                &ChangeKind::Edit("Assign module".to_string()),
                &ChangeKind::Undo,
                &ChangeKind::Redo,
            ]
        );
        // The listener observes the committed value.
        assert_eq!(seen[1].0, seen[3].0);
    }

    assert!(session.unsubscribe(handle));
    assert!(!session.unsubscribe(handle));
    session.clear_slot(&slot).unwrap();
    assert_eq!(seen.borrow().len(), 4);
}

#[test]
fn test_wizard_flow() {
    let mut session = session();
    assert_eq!(session.current_step(), WizardStep::Dimensions);
    assert!(session.next_step());

    let slot = session.add_slot(Category::Base, 600).unwrap();
    assert!(!session.can_proceed());
    assert!(!session.next_step());
    assert_eq!(session.current_step(), WizardStep::Layout);
    assert_eq!(
        session.step_issues(WizardStep::Layout),
        vec![StepIssue::UndecidedSlot {
            slot_id: slot.clone(),
            position: 0,
        }]
    );

    session.assign_module(&slot, ModuleType::DrawerStack).unwrap();
    assert!(session.next_step());
    assert_eq!(session.current_step(), WizardStep::Finishes);
    assert!(!session.next_step());

    for (field, code) in [
        (FinishField::Material, "POL-NOWM"),
        (FinishField::DoorProfile, "SHAKER-SLIM"),
        (FinishField::Hardware, "PULL-BAR"),
    ] {
        session.set_finish(field, code).unwrap();
    }
    assert!(session.next_step());
    assert_eq!(session.current_step(), WizardStep::Review);

    // Undo does not move the wizard.
    assert!(session.undo());
    assert_eq!(session.current_step(), WizardStep::Review);

    assert!(session.go_to_step(1));
    assert!(session.prev_step());
    assert_eq!(session.current_step(), WizardStep::Dimensions);
    assert!(session.go_to_step(3));
}

#[test]
fn test_quote_tracks_current_state() {
    let mut tables = PriceTables::new();
    tables.add_module(ModulePriceRecord::new(ModuleType::Standard, 45_000));
    tables.add_material(MaterialRecord::new("POL-NOWM", 15_000));
    tables.add_door_profile(DoorProfileRecord::new("SHAKER-SLIM", 4_500));

    let mut session = session();
    assert_eq!(session.quote(&tables).total, 0);

    session.add_module_slot(ModuleType::Standard).unwrap();
    session.set_finish(FinishField::Material, "POL-NOWM").unwrap();
    session.set_finish(FinishField::DoorProfile, "SHAKER-SLIM").unwrap();
    let quote = session.quote(&tables);
    assert_eq!(quote.total, 45_000 + 15_000 + 9_000);
    assert_eq!(quote.variance, 3_450);

    session.undo();
    assert_eq!(session.quote(&tables).total, 60_000);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = session();
    let second = session();
    first.add_slot(Category::Base, 600).unwrap();
    assert_eq!(first.config().slots.len(), 1);
    assert!(second.config().slots.is_empty());
    assert!(!second.can_undo());
}

#[test]
fn test_reopen_from_snapshot() {
    let mut session = session();
    let slot = session.add_module_slot(ModuleType::OvenHousing).unwrap();
    session.set_finish(FinishField::Material, "OAK-NAT").unwrap();
    session.next_step();

    let snapshot = session.snapshot("Utility room");
    let reopened = ConfiguratorSession::from_snapshot(
        Arc::new(ModuleCatalog::standard()),
        SessionOptions::default(),
        snapshot,
    )
    .unwrap();

    assert_eq!(reopened.config(), session.config());
    assert!(reopened.config().slot(&slot).is_some());
    assert!(!reopened.can_undo());
    assert_eq!(reopened.current_step(), WizardStep::Dimensions);
}
