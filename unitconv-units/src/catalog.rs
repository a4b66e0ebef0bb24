//! Unit catalog - units grouped by category, indexed for lookup

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use unitconv_core::{fold_case, load_records, CatalogError, LookupIndex};

use crate::{ConversionError, Unit, EMBEDDED_UNITS};

/// Every known unit, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    categories: BTreeSet<String>,
    index: LookupIndex,
}

/// How a category was first declared
struct CategoryDecl {
    spelling: String,
    base_unit: String,
}

impl UnitCatalog {
    /// Load the table compiled into the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED_UNITS)
    }

    /// Load a unit table. Any bad line or violated invariant aborts the
    /// whole load.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let records = load_records::<Unit>(source)?;

        let mut catalog = UnitCatalog {
            units: Vec::with_capacity(records.len()),
            categories: BTreeSet::new(),
            index: LookupIndex::new(),
        };
        let mut declared: BTreeMap<String, CategoryDecl> = BTreeMap::new();

        for (line, unit) in records {
            catalog.index.insert(line, &unit.name, &unit.symbol)?;

            let category_key = fold_case(&unit.category);
            match declared.get(&category_key) {
                Some(decl) if decl.spelling != unit.category => {
                    return Err(CatalogError::InconsistentCategory {
                        category: decl.spelling.clone(),
                        reason: format!("line {}: spelled '{}'", line, unit.category),
                    });
                }
                Some(decl) if decl.base_unit != unit.base_unit => {
                    return Err(CatalogError::InconsistentCategory {
                        category: decl.spelling.clone(),
                        reason: format!(
                            "line {}: base unit '{}' differs from '{}'",
                            line, unit.base_unit, decl.base_unit
                        ),
                    });
                }
                Some(_) => {}
                None => {
                    declared.insert(
                        category_key,
                        CategoryDecl {
                            spelling: unit.category.clone(),
                            base_unit: unit.base_unit.clone(),
                        },
                    );
                }
            }

            catalog.units.push(unit);
        }

        catalog.check_base_units(&declared)?;
        catalog.categories = declared.into_values().map(|d| d.spelling).collect();

        debug!(
            units = catalog.units.len(),
            categories = catalog.categories.len(),
            "unit catalog loaded"
        );
        Ok(catalog)
    }

    /// Each category's base unit must be one of its own units, with factor 1.
    /// Names are unique, so no two categories can share a base unit.
    fn check_base_units(&self, declared: &BTreeMap<String, CategoryDecl>) -> Result<(), CatalogError> {
        for decl in declared.values() {
            let base = self
                .units
                .iter()
                .find(|u| u.category == decl.spelling && u.is_base())
                .ok_or_else(|| CatalogError::InconsistentCategory {
                    category: decl.spelling.clone(),
                    reason: format!("base unit '{}' is not defined in the category", decl.base_unit),
                })?;

            if base.conversion_factor != 1.0 {
                return Err(CatalogError::InconsistentCategory {
                    category: decl.spelling.clone(),
                    reason: format!(
                        "base unit '{}' has factor {} instead of 1",
                        base.name, base.conversion_factor
                    ),
                });
            }
        }

        Ok(())
    }

    /// Distinct category names, as spelled in the table, sorted
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|c| c.as_str())
    }

    /// Units of one category (case-insensitive), in table order
    pub fn units_in(&self, category: &str) -> Result<Vec<&Unit>, ConversionError> {
        let units: Vec<&Unit> = self.units.iter().filter(|u| u.in_category(category)).collect();
        if units.is_empty() {
            return Err(ConversionError::UnknownCategory(category.to_string()));
        }
        Ok(units)
    }

    /// Find a unit by exact symbol, then by case-insensitive name
    pub fn resolve(&self, token: &str) -> Result<&Unit, ConversionError> {
        self.index
            .get(token)
            .map(|idx| &self.units[idx])
            .ok_or_else(|| ConversionError::UnknownUnit(token.to_string()))
    }

    /// All units in table order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
