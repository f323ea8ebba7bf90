//! Localized string table
//!
//! Strings are keyed by `(category, origin)`. The table is built from two
//! layers: system strings shipped with the client, then custom strings from the
//! game, which override system entries. A duplicated system entry keeps the
//! first record and logs a warning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of a localized strings source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedRecord {
    #[serde(default)]
    pub category: String,
    pub origin: String,
    pub local: String,
}

impl LocalizedRecord {
    pub fn new(
        category: impl Into<String>,
        origin: impl Into<String>,
        local: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            origin: origin.into(),
            local: local.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Invalid {layer} localized strings: {source}")]
    Parse {
        layer: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedStrings {
    strings: HashMap<(String, String), String>,
}

impl LocalizedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the system layer, then overlay the custom layer
    pub fn load(
        system: impl IntoIterator<Item = LocalizedRecord>,
        custom: impl IntoIterator<Item = LocalizedRecord>,
    ) -> Self {
        let mut table = Self::new();

        for record in system {
            let key = (record.category, record.origin);
            if table.strings.contains_key(&key) {
                tracing::warn!(
                    category = %key.0,
                    origin = %key.1,
                    "Duplicated system localized string, keeping the first"
                );
                continue;
            }
            table.strings.insert(key, record.local);
        }

        for record in custom {
            table
                .strings
                .insert((record.category, record.origin), record.local);
        }

        tracing::debug!(strings = table.strings.len(), "Loaded localized strings");
        table
    }

    /// Build from two JSON arrays of `{category?, origin, local}` records
    pub fn from_json(system: &str, custom: &str) -> Result<Self, LocalizationError> {
        let system: Vec<LocalizedRecord> =
            serde_json::from_str(system).map_err(|source| LocalizationError::Parse {
                layer: "system",
                source,
            })?;
        let custom: Vec<LocalizedRecord> =
            serde_json::from_str(custom).map_err(|source| LocalizationError::Parse {
                layer: "custom",
                source,
            })?;
        Ok(Self::load(system, custom))
    }

    /// Local string for `origin`; otherwise `default`; otherwise `origin`
    /// itself. Empty local strings count as missing.
    pub fn translate(&self, origin: &str, category: &str, default: Option<&str>) -> String {
        let local = self
            .strings
            .get(&(category.to_string(), origin.to_string()))
            .filter(|local| !local.is_empty());

        match (local, default) {
            (Some(local), _) => local.clone(),
            (None, Some(default)) => default.to_string(),
            (None, None) => origin.to_string(),
        }
    }

    /// Translate an uncategorized string
    pub fn tr(&self, origin: &str) -> String {
        self.translate(origin, "", None)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untranslated_returns_origin() {
        let strings = LocalizedStrings::new();
        assert_eq!(strings.tr("(N)"), "(N)");
    }

    #[test]
    fn test_default_beats_origin() {
        let strings = LocalizedStrings::new();
        assert_eq!(strings.translate("MAP", "", Some("Map")), "Map");
    }

    #[test]
    fn test_custom_layer_overrides_system() {
        let strings = LocalizedStrings::load(
            vec![LocalizedRecord::new("", "MAP", "Carte")],
            vec![LocalizedRecord::new("", "MAP", "Plan")],
        );
        assert_eq!(strings.tr("MAP"), "Plan");
    }

    #[test]
    fn test_duplicate_system_entry_keeps_first() {
        let strings = LocalizedStrings::load(
            vec![
                LocalizedRecord::new("", "(E)", "(O)"),
                LocalizedRecord::new("", "(E)", "(Est)"),
            ],
            Vec::new(),
        );
        assert_eq!(strings.tr("(E)"), "(O)");
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn test_categories_are_separate() {
        let strings = LocalizedStrings::load(
            vec![LocalizedRecord::new("direction", "(N)", "(Nord)")],
            Vec::new(),
        );
        assert_eq!(strings.tr("(N)"), "(N)");
        assert_eq!(strings.translate("(N)", "direction", None), "(Nord)");
    }

    #[test]
    fn test_empty_local_counts_as_missing() {
        let strings =
            LocalizedStrings::load(vec![LocalizedRecord::new("", "MAP", "")], Vec::new());
        assert_eq!(strings.translate("MAP", "", Some("Map")), "Map");
    }

    #[test]
    fn test_from_json() {
        let strings = LocalizedStrings::from_json(
            r#"[{"origin":"(S)","local":"(Sud)"}]"#,
            r#"[{"category":"","origin":"MAP","local":"Carte"}]"#,
        )
        .expect("valid layers");
        assert_eq!(strings.tr("(S)"), "(Sud)");
        assert_eq!(strings.tr("MAP"), "Carte");
    }

    #[test]
    fn test_from_json_reports_layer() {
        let err = LocalizedStrings::from_json("[]", "{").expect_err("bad custom layer");
        assert!(err.to_string().starts_with("Invalid custom localized strings"));
    }
}
