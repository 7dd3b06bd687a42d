use cabinetkit_configurator::model::*;
use cabinetkit_configurator::wizard::{
    can_proceed_from, step_issues, StepIssue, WizardState, WizardStep,
};
use cabinetkit_core::{Axis, Category};

fn slot(id: &str, position: usize, content: SlotContent) -> Slot {
    Slot {
        id: SlotId::from(id),
        position,
        category: Category::Base,
        width: 600,
        content,
    }
}

fn finished() -> FinishConfig {
    FinishConfig {
        material: "POL-NOWM".to_string(),
        door_profile: "SHAKER-SLIM".to_string(),
        hardware: "PULL-BAR".to_string(),
    }
}

#[test]
fn test_step_indices() {
    for (i, step) in WizardStep::ALL.into_iter().enumerate() {
        assert_eq!(step.index(), i);
        assert_eq!(WizardStep::from_index(i), Some(step));
    }
    assert_eq!(WizardStep::from_index(4), None);
    assert_eq!(WizardStep::Review.next(), None);
    assert_eq!(WizardStep::Dimensions.prev(), None);
    assert_eq!(WizardStep::Layout.to_string(), "Layout");
}

#[test]
fn test_dimensions_step_issues() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    assert!(can_proceed_from(WizardStep::Dimensions, &config, &bounds));

    config.dimensions = CabinetDimensions::new(0, 900, 5000);
    let issues = step_issues(WizardStep::Dimensions, &config, &bounds);
    assert_eq!(issues.len(), 2);
    assert!(matches!(
        issues[0],
        StepIssue::DimensionOutOfRange {
            axis: Axis::Width,
            value: 0,
            ..
        }
    ));
    assert!(matches!(
        issues[1],
        StepIssue::DimensionOutOfRange {
            axis: Axis::Depth,
            value: 5000,
            min: 250,
            max: 900,
        }
    ));
}

#[test]
fn test_layout_step_requires_decided_slots() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    // An empty run has nothing undecided.
    assert!(can_proceed_from(WizardStep::Layout, &config, &bounds));

    config.slots = vec![
        slot("a", 0, SlotContent::Empty),
        slot("b", 1, SlotContent::Undecided),
    ];
    let issues = step_issues(WizardStep::Layout, &config, &bounds);
    assert_eq!(
        issues,
        vec![StepIssue::UndecidedSlot {
            slot_id: SlotId::from("b"),
            position: 1,
        }]
    );
    assert_eq!(
        issues[0].to_string(),
        "Slot 2 needs a module or must be marked empty"
    );
}

#[test]
fn test_finishes_step_requires_all_codes() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    assert_eq!(
        step_issues(WizardStep::Finishes, &config, &bounds),
        vec![
            StepIssue::MissingFinish(FinishField::Material),
            StepIssue::MissingFinish(FinishField::DoorProfile),
            StepIssue::MissingFinish(FinishField::Hardware),
        ]
    );

    config.finish = finished();
    assert!(can_proceed_from(WizardStep::Finishes, &config, &bounds));
    assert!(can_proceed_from(WizardStep::Review, &config, &bounds));
}

#[test]
fn test_next_step_blocked_at_layout() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    config.slots = vec![slot("a", 0, SlotContent::Undecided)];

    let mut wizard = WizardState::new();
    assert!(wizard.next_step(&config, &bounds));
    assert_eq!(wizard.current(), WizardStep::Layout);

    let before = wizard.clone();
    assert!(!wizard.next_step(&config, &bounds));
    assert_eq!(wizard, before);

    config.slots[0].content = SlotContent::Empty;
    assert!(wizard.next_step(&config, &bounds));
    assert_eq!(wizard.current(), WizardStep::Finishes);
}

#[test]
fn test_go_to_step_only_reaches_visited() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    config.finish = finished();

    let mut wizard = WizardState::new();
    assert!(!wizard.go_to_step(2));
    assert!(!wizard.go_to_step(9));
    assert_eq!(wizard.current(), WizardStep::Dimensions);

    assert!(wizard.next_step(&config, &bounds));
    assert!(wizard.next_step(&config, &bounds));
    assert!(wizard.is_visited(WizardStep::Finishes));

    assert!(wizard.go_to_step(0));
    assert_eq!(wizard.current(), WizardStep::Dimensions);
    assert!(wizard.go_to_step(2));
    assert_eq!(wizard.current(), WizardStep::Finishes);
    assert!(!wizard.go_to_step(3));
}

#[test]
fn test_prev_step_stops_at_dimensions() {
    let bounds = DimensionBounds::default();
    let config = CabinetConfig::default();
    let mut wizard = WizardState::new();

    assert!(!wizard.prev_step());
    assert!(wizard.next_step(&config, &bounds));
    assert!(wizard.prev_step());
    assert_eq!(wizard.current(), WizardStep::Dimensions);
    // Going back keeps the step reachable.
    assert!(wizard.is_visited(WizardStep::Layout));
}

#[test]
fn test_review_is_not_terminal() {
    let bounds = DimensionBounds::default();
    let mut config = CabinetConfig::default();
    config.finish = finished();

    let mut wizard = WizardState::new();
    while wizard.next_step(&config, &bounds) {}
    assert_eq!(wizard.current(), WizardStep::Review);
    assert!(wizard.prev_step());
    assert_eq!(wizard.current(), WizardStep::Finishes);

    wizard.reset();
    assert_eq!(wizard, WizardState::default());
}
