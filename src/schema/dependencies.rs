use super::tables::{get_table, ALL_TABLES};
use super::types::TableSchema;
use std::collections::{HashMap, HashSet};

/// Foreign-key graph over the static table list
pub struct DependencyResolver {
    /// Map of table name -> tables it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        let deps = ALL_TABLES
            .iter()
            .map(|table| (table.name, table.dependencies()))
            .collect();

        Self { deps }
    }

    /// Tables in load order, after checking that every table comes after
    /// the tables it references
    pub fn load_order(&self) -> Result<Vec<&'static TableSchema>, String> {
        self.check_order(ALL_TABLES)?;
        Ok(ALL_TABLES.to_vec())
    }

    /// Verify that `order` never loads a child before one of its parents
    pub fn check_order(&self, order: &[&TableSchema]) -> Result<(), String> {
        let mut loaded: HashSet<&str> = HashSet::new();

        for table in order {
            let parents = self
                .deps
                .get(table.name)
                .ok_or_else(|| format!("Unknown table: {}", table.name))?;

            if let Some(missing) = parents.iter().find(|p| !loaded.contains(*p)) {
                if get_table(missing).is_none() {
                    return Err(format!("{} references unknown table {}", table.name, missing));
                }
                return Err(format!("{} would load before its parent {}", table.name, missing));
            }
            loaded.insert(table.name);
        }

        Ok(())
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}
