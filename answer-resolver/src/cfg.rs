//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use tracing::info;

use crate::{error::ResolverError, table::AnswerTable};

/// Where the answer table comes from.
#[derive(Clone, Debug, Default)]
pub struct ResolverConfig {
    /// JSON file overriding the built-in table (`ANSWER_TABLE_PATH`).
    pub table_path: Option<PathBuf>,
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        let table_path = std::env::var("ANSWER_TABLE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { table_path }
    }

    /// Builds the table: the file if configured, otherwise the built-in one.
    pub fn load_table(&self) -> Result<AnswerTable, ResolverError> {
        match &self.table_path {
            Some(path) => AnswerTable::from_json_file(path),
            None => {
                let table = AnswerTable::builtin();
                info!(entries = table.len(), "using built-in answer table");
                Ok(table)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_table() {
        let table = ResolverConfig::default().load_table().unwrap();
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn configured_path_must_exist() {
        let cfg = ResolverConfig {
            table_path: Some(PathBuf::from("/no/such/table.json")),
        };
        assert!(matches!(cfg.load_table(), Err(ResolverError::TableIo { .. })));
    }
}
