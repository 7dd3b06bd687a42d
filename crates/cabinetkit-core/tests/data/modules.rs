use cabinetkit_core::data::modules::*;

#[test]
fn test_every_type_has_a_definition() {
    let catalog = ModuleCatalog::standard();
    for module_type in ModuleType::ALL {
        let def = catalog.get(module_type).expect("definition");
        assert_eq!(def.module_type, module_type);
        assert_eq!(def.category(), module_type.category());
        assert!(def.default_width > 0);
    }
}

#[test]
fn test_lookup_by_code() {
    let catalog = ModuleCatalog::standard();
    let sink = catalog.by_code("sink-base").expect("sink base");
    assert_eq!(sink.module_type, ModuleType::SinkBase);
    assert_eq!(sink.door_count, 2);
    assert!(catalog.by_code("SINK-BASE").is_none());
    assert!(catalog.by_code("").is_none());
}

#[test]
fn test_categories_partition_catalog() {
    let catalog = ModuleCatalog::standard();
    let base = catalog.for_category(Category::Base);
    let overhead = catalog.for_category(Category::Overhead);

    assert!(base.iter().all(|d| d.category() == Category::Base));
    assert!(overhead.iter().all(|d| d.category() == Category::Overhead));
    assert_eq!(base.len() + overhead.len(), catalog.len());
    assert_eq!(base[0].module_type, ModuleType::Standard);
}

#[test]
fn test_door_counts() {
    let catalog = ModuleCatalog::standard();
    assert_eq!(catalog.door_count(ModuleType::Standard), 2);
    assert_eq!(catalog.door_count(ModuleType::CornerBase), 1);
    assert_eq!(catalog.door_count(ModuleType::DrawerStack), 0);
    assert_eq!(catalog.door_count(ModuleType::WallGlass), 2);
}

#[test]
fn test_category_parse_and_display() {
    assert_eq!("base".parse::<Category>(), Ok(Category::Base));
    assert_eq!("Wall".parse::<Category>(), Ok(Category::Overhead));
    assert!("tall".parse::<Category>().is_err());
    assert_eq!(Category::Overhead.to_string(), "overhead");
}
