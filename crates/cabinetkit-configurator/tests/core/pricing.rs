use cabinetkit_configurator::model::*;
use cabinetkit_configurator::pricing::{quote, LookupGap, LookupGapKind, DEFAULT_VARIANCE_PERCENT};
use cabinetkit_core::{
    format_cents, DoorProfileRecord, HardwarePrice, HardwareRecord, MaterialRecord,
    ModuleCatalog, ModulePriceRecord, ModuleType, PriceTables,
};

fn tables() -> PriceTables {
    let mut tables = PriceTables::new();
    tables.add_module(ModulePriceRecord::new(ModuleType::Standard, 45_000));
    tables.add_module(ModulePriceRecord::new(ModuleType::SinkBase, 65_000));
    tables.add_module(ModulePriceRecord::new(ModuleType::DrawerStack, 80_000));
    tables.add_material(MaterialRecord::new("POL-NOWM", 15_000));
    tables.add_door_profile(DoorProfileRecord::new("SHAKER-SLIM", 4_500));
    tables
}

fn run(modules: &[ModuleType], catalog: &ModuleCatalog) -> CabinetConfig {
    let mut config = CabinetConfig::default();
    for (position, module_type) in modules.iter().enumerate() {
        let width = catalog.get(*module_type).map_or(600, |d| d.default_width);
        config.slots.push(Slot {
            id: SlotId::from(format!("slot-{}", position).as_str()),
            position,
            category: module_type.category(),
            width,
            content: SlotContent::Module(ModuleConfig::new(*module_type, catalog)),
        });
    }
    config
}

fn kitchen(catalog: &ModuleCatalog) -> CabinetConfig {
    let mut config = run(
        &[ModuleType::Standard, ModuleType::SinkBase, ModuleType::CornerBase],
        catalog,
    );
    config.finish.material = "POL-NOWM".to_string();
    config.finish.door_profile = "SHAKER-SLIM".to_string();
    config
}

#[test]
fn test_itemised_quote() {
    let catalog = ModuleCatalog::standard();
    let config = kitchen(&catalog);
    assert!(config.check_invariants().is_ok());

    let breakdown = quote(&config, &catalog, &tables(), DEFAULT_VARIANCE_PERCENT);

    assert_eq!(breakdown.cabinet_cost, 110_000);
    assert_eq!(breakdown.material_cost, 15_000);
    assert_eq!(breakdown.door_count, 5);
    assert_eq!(breakdown.door_cost, 22_500);
    assert_eq!(breakdown.hardware_cost, 0);
    assert_eq!(breakdown.total, 147_500);
    assert_eq!(format_cents(breakdown.total), "$1,475.00");

    assert_eq!(breakdown.variance, 7_375);
    assert_eq!(breakdown.low(), 140_125);
    assert_eq!(breakdown.high(), 154_875);
    assert_eq!(breakdown.display_total(), "$1,475.00 ± $73.75");

    // The corner unit has no price record: priced at zero and reported.
    assert_eq!(
        breakdown.gaps,
        vec![LookupGap {
            kind: LookupGapKind::Module,
            code: "corner-base".to_string(),
        }]
    );
    let labels: Vec<&str> = breakdown
        .line_items
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Standard Base #1",
            "Sink Base #2",
            "Material POL-NOWM",
            "Doors 5 x SHAKER-SLIM",
        ]
    );
}

#[test]
fn test_unknown_material_contributes_zero() {
    let catalog = ModuleCatalog::standard();
    let mut config = kitchen(&catalog);
    config.finish.material = "NO-SUCH-BOARD".to_string();

    let breakdown = quote(&config, &catalog, &tables(), 0);
    assert_eq!(breakdown.material_cost, 0);
    assert_eq!(breakdown.total, 132_500);
    assert_eq!(breakdown.variance, 0);
    assert!(breakdown.gaps.contains(&LookupGap {
        kind: LookupGapKind::Material,
        code: "NO-SUCH-BOARD".to_string(),
    }));
}

#[test]
fn test_unset_finishes_are_not_gaps() {
    let catalog = ModuleCatalog::standard();
    let config = run(&[ModuleType::Standard], &catalog);

    let breakdown = quote(&config, &catalog, &tables(), DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.total, 45_000);
    assert!(!breakdown.has_gaps());
}

#[test]
fn test_repeated_unknown_module_reported_once() {
    let catalog = ModuleCatalog::standard();
    let config = run(&[ModuleType::CornerBase, ModuleType::OpenBase, ModuleType::OpenBase], &catalog);

    let breakdown = quote(&config, &catalog, &PriceTables::new(), DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.gaps.len(), 2);
}

#[test]
fn test_hardware_per_unit_counts_doors_and_drawers() {
    let catalog = ModuleCatalog::standard();
    let mut config = run(&[ModuleType::Standard, ModuleType::DrawerStack], &catalog);
    config.finish.hardware = "PULL-BAR".to_string();

    let mut tables = tables();
    tables.add_hardware(HardwareRecord::new("PULL-BAR", HardwarePrice::PerUnit(800)));

    let breakdown = quote(&config, &catalog, &tables, DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.door_count, 2);
    assert_eq!(breakdown.hardware_units, 5);
    assert_eq!(breakdown.hardware_cost, 4_000);
    assert_eq!(breakdown.total, 45_000 + 80_000 + 4_000);
}

#[test]
fn test_hardware_flat_price() {
    let catalog = ModuleCatalog::standard();
    let mut config = run(&[ModuleType::Standard, ModuleType::DrawerStack], &catalog);
    config.finish.hardware = "PUSH-OPEN".to_string();

    let mut tables = PriceTables::new();
    tables.add_hardware(HardwareRecord::new("PUSH-OPEN", HardwarePrice::Flat(12_000)));

    let breakdown = quote(&config, &catalog, &tables, DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.hardware_cost, 12_000);
    assert_eq!(breakdown.total, 12_000);
    assert_eq!(breakdown.variance, 600);
}

#[test]
fn test_module_record_door_count_overrides_catalog() {
    let catalog = ModuleCatalog::standard();
    let mut config = run(&[ModuleType::WallLiftUp], &catalog);
    config.finish.door_profile = "SHAKER-SLIM".to_string();

    let mut tables = tables();
    let mut record = ModulePriceRecord::new(ModuleType::WallLiftUp, 30_000);
    record.door_count = Some(2);
    tables.add_module(record);

    let breakdown = quote(&config, &catalog, &tables, DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.door_count, 2);
    assert_eq!(breakdown.door_cost, 9_000);
}

#[test]
fn test_undecided_and_empty_slots_cost_nothing() {
    let catalog = ModuleCatalog::standard();
    let mut config = run(&[ModuleType::Standard, ModuleType::Standard], &catalog);
    config.slots[0].content = SlotContent::Undecided;
    config.slots[1].content = SlotContent::Empty;

    let breakdown = quote(&config, &catalog, &tables(), DEFAULT_VARIANCE_PERCENT);
    assert_eq!(breakdown.total, 0);
    assert_eq!(breakdown.door_count, 0);
}

#[test]
fn test_quote_is_deterministic() {
    let catalog = ModuleCatalog::standard();
    let config = kitchen(&catalog);
    let tables = tables();
    assert_eq!(
        quote(&config, &catalog, &tables, 5),
        quote(&config, &catalog, &tables, 5)
    );
}
