//! Module Catalog
//!
//! This module provides:
//! - Slot/module categories (base and overhead)
//! - The closed set of module types a slot can hold
//! - Module definitions (door and drawer counts, default widths)
//! - The catalog registry used to validate and describe slot contents

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Cabinet row a slot or module belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Floor-standing base cabinets
    Base,
    /// Wall-hung overhead cabinets
    Overhead,
}

impl Category {
    /// Both categories, base first
    pub const ALL: [Category; 2] = [Category::Base, Category::Overhead];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Overhead => write!(f, "overhead"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "overhead" | "wall" => Ok(Self::Overhead),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Module kinds declared by the catalog (7 base, 5 overhead)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleType {
    /// Two-door base cabinet
    Standard,
    /// Sink base with open back
    SinkBase,
    /// Three-drawer stack
    DrawerStack,
    /// Blind corner base
    CornerBase,
    /// Narrow pull-out pantry
    PantryPullout,
    /// Built-in oven housing with a drawer below
    OvenHousing,
    /// Open shelving base
    OpenBase,
    /// Two-door wall cabinet
    WallStandard,
    /// Glass-fronted wall cabinet
    WallGlass,
    /// Open wall shelving
    WallOpen,
    /// Corner wall cabinet
    WallCorner,
    /// Lift-up door wall cabinet
    WallLiftUp,
}

impl ModuleType {
    /// Every module type in catalog order
    pub const ALL: [ModuleType; 12] = [
        ModuleType::Standard,
        ModuleType::SinkBase,
        ModuleType::DrawerStack,
        ModuleType::CornerBase,
        ModuleType::PantryPullout,
        ModuleType::OvenHousing,
        ModuleType::OpenBase,
        ModuleType::WallStandard,
        ModuleType::WallGlass,
        ModuleType::WallOpen,
        ModuleType::WallCorner,
        ModuleType::WallLiftUp,
    ];

    /// Catalog code, also the key used by price tables
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::SinkBase => "sink-base",
            Self::DrawerStack => "drawer-stack",
            Self::CornerBase => "corner-base",
            Self::PantryPullout => "pantry-pullout",
            Self::OvenHousing => "oven-housing",
            Self::OpenBase => "open-base",
            Self::WallStandard => "wall-standard",
            Self::WallGlass => "wall-glass",
            Self::WallOpen => "wall-open",
            Self::WallCorner => "wall-corner",
            Self::WallLiftUp => "wall-lift-up",
        }
    }

    /// Look up a module type by catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Row this module type is built for
    pub fn category(&self) -> Category {
        match self {
            Self::Standard
            | Self::SinkBase
            | Self::DrawerStack
            | Self::CornerBase
            | Self::PantryPullout
            | Self::OvenHousing
            | Self::OpenBase => Category::Base,
            Self::WallStandard
            | Self::WallGlass
            | Self::WallOpen
            | Self::WallCorner
            | Self::WallLiftUp => Category::Overhead,
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown module type: {}", s))
    }
}

/// Static description of a module type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Module kind
    pub module_type: ModuleType,
    /// Display name
    pub name: String,
    /// Number of doors on the front
    pub door_count: u32,
    /// Number of drawer fronts
    pub drawer_count: u32,
    /// Width suggested when the module is added to a run, in mm
    pub default_width: u32,
}

impl ModuleDefinition {
    /// Create a definition with no doors or drawers
    pub fn new(module_type: ModuleType, name: impl Into<String>, default_width: u32) -> Self {
        Self {
            module_type,
            name: name.into(),
            door_count: 0,
            drawer_count: 0,
            default_width,
        }
    }

    /// Set the door count
    pub fn with_doors(mut self, door_count: u32) -> Self {
        self.door_count = door_count;
        self
    }

    /// Set the drawer count
    pub fn with_drawers(mut self, drawer_count: u32) -> Self {
        self.drawer_count = drawer_count;
        self
    }

    /// Catalog code
    pub fn code(&self) -> &'static str {
        self.module_type.code()
    }

    /// Row this module belongs to
    pub fn category(&self) -> Category {
        self.module_type.category()
    }

    /// Number of fronts that need a handle or knob
    pub fn hardware_units(&self) -> u32 {
        self.door_count + self.drawer_count
    }
}

/// Module catalog - registry of module definitions
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: HashMap<ModuleType, ModuleDefinition>,
}

impl ModuleCatalog {
    /// Build the standard catalog of twelve module types
    pub fn standard() -> Self {
        let definitions = [
            ModuleDefinition::new(ModuleType::Standard, "Standard Base", 600).with_doors(2),
            ModuleDefinition::new(ModuleType::SinkBase, "Sink Base", 800).with_doors(2),
            ModuleDefinition::new(ModuleType::DrawerStack, "Drawer Stack", 600).with_drawers(3),
            ModuleDefinition::new(ModuleType::CornerBase, "Blind Corner Base", 900).with_doors(1),
            ModuleDefinition::new(ModuleType::PantryPullout, "Pull-out Pantry", 300).with_doors(1),
            ModuleDefinition::new(ModuleType::OvenHousing, "Oven Housing", 600).with_drawers(1),
            ModuleDefinition::new(ModuleType::OpenBase, "Open Shelf Base", 600),
            ModuleDefinition::new(ModuleType::WallStandard, "Standard Wall", 600).with_doors(2),
            ModuleDefinition::new(ModuleType::WallGlass, "Glass Door Wall", 600).with_doors(2),
            ModuleDefinition::new(ModuleType::WallOpen, "Open Shelf Wall", 600),
            ModuleDefinition::new(ModuleType::WallCorner, "Corner Wall", 600).with_doors(1),
            ModuleDefinition::new(ModuleType::WallLiftUp, "Lift-up Wall", 900).with_doors(1),
        ];

        let modules = definitions
            .into_iter()
            .map(|def| (def.module_type, def))
            .collect();
        Self { modules }
    }

    /// Get a module definition. Every `ModuleType` has one in the standard catalog.
    pub fn get(&self, module_type: ModuleType) -> Option<&ModuleDefinition> {
        self.modules.get(&module_type)
    }

    /// Get a module definition by catalog code
    pub fn by_code(&self, code: &str) -> Option<&ModuleDefinition> {
        ModuleType::from_code(code).and_then(|t| self.get(t))
    }

    /// All definitions for one category, in catalog order
    pub fn for_category(&self, category: Category) -> Vec<&ModuleDefinition> {
        ModuleType::ALL
            .iter()
            .filter(|t| t.category() == category)
            .filter_map(|t| self.get(*t))
            .collect()
    }

    /// Door count declared for a module type (0 if undefined)
    pub fn door_count(&self, module_type: ModuleType) -> u32 {
        self.get(module_type).map_or(0, |d| d.door_count)
    }

    /// Number of definitions in the catalog
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
