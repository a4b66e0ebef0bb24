//! Constant catalog - constants grouped by subject

use std::collections::BTreeMap;
use tracing::debug;
use unitconv_core::{fold_case, load_records, CatalogError, LookupIndex};

use crate::{Constant, ConstantError, EMBEDDED_CONSTANTS};

/// Every known constant, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct ConstantCatalog {
    constants: Vec<Constant>,
    /// Folded group key -> spelling used in the table
    groups: BTreeMap<String, String>,
    index: LookupIndex,
}

impl ConstantCatalog {
    /// Load the table compiled into the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(EMBEDDED_CONSTANTS)
    }

    /// Load a constant table, failing on the first bad line
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let records = load_records::<Constant>(source)?;

        let mut catalog = ConstantCatalog {
            constants: Vec::with_capacity(records.len()),
            groups: BTreeMap::new(),
            index: LookupIndex::new(),
        };

        for (line, constant) in records {
            catalog.index.insert(line, &constant.name, &constant.symbol)?;

            let spelling = catalog
                .groups
                .entry(fold_case(&constant.group))
                .or_insert_with(|| constant.group.clone());
            if *spelling != constant.group {
                return Err(CatalogError::InconsistentCategory {
                    category: spelling.clone(),
                    reason: format!("line {}: spelled '{}'", line, constant.group),
                });
            }

            catalog.constants.push(constant);
        }

        debug!(
            constants = catalog.constants.len(),
            groups = catalog.groups.len(),
            "constant catalog loaded"
        );
        Ok(catalog)
    }

    /// Distinct group names, as spelled in the table, sorted
    pub fn groups(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.values().map(|g| g.as_str())
    }

    /// Constants of one group (case-insensitive), in table order
    pub fn list_in(&self, group: &str) -> Result<Vec<&Constant>, ConstantError> {
        let constants: Vec<&Constant> = self.constants.iter().filter(|c| c.in_group(group)).collect();
        if constants.is_empty() {
            return Err(ConstantError::UnknownGroup(group.to_string()));
        }
        Ok(constants)
    }

    /// Full record of a constant, by exact symbol or case-insensitive name
    pub fn detail(&self, token: &str) -> Result<&Constant, ConstantError> {
        self.index
            .get(token)
            .map(|idx| &self.constants[idx])
            .ok_or_else(|| ConstantError::UnknownConstant(token.to_string()))
    }

    /// The literal value text of a constant
    pub fn value_of(&self, token: &str) -> Result<&str, ConstantError> {
        self.detail(token).map(|c| c.value.as_str())
    }

    /// All constants in table order
    pub fn all(&self) -> &[Constant] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
