//! # Engine Options
//!
//! Process-wide option values of the mesher (`Category.Name` keys).
//!
//! Values come from three places:
//! - built-in defaults (see [`config::constants`])
//! - the engine argument list handed to [`crate::Session::initialize`]
//! - explicit `set_option_*` calls on the session
//!
//! Only the last group is replayed into generated scripts. Argument-derived
//! values already reach the mesher through its command line.

use crate::error::EngineError;
use config::constants::{CLSCALE_FLAG, DEFAULT_MESH_SIZE_FACTOR, MESH_SIZE_FACTOR_OPTION};
use std::collections::BTreeMap;

/// A single option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Number(f64),
    String(String),
}

/// Option table with override tracking.
///
/// # Example
///
/// ```rust
/// use vf_engine::OptionStore;
///
/// let args = vec!["-clscale".to_string(), "0.5".to_string()];
/// let store = OptionStore::from_args(&args).unwrap();
/// assert_eq!(store.number("Mesh.MeshSizeFactor").unwrap(), 0.5);
/// assert_eq!(store.overrides().count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct OptionStore {
    values: BTreeMap<String, OptionValue>,
    overrides: BTreeMap<String, OptionValue>,
}

impl Default for OptionStore {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(
            MESH_SIZE_FACTOR_OPTION.to_string(),
            OptionValue::Number(DEFAULT_MESH_SIZE_FACTOR),
        );
        Self {
            values,
            overrides: BTreeMap::new(),
        }
    }
}

impl OptionStore {
    /// Builds the table from the mesher's command-line arguments.
    ///
    /// `-clscale <factor>` sets `Mesh.MeshSizeFactor`. Every other argument
    /// is left for the mesher itself.
    pub fn from_args(args: &[String]) -> Result<Self, EngineError> {
        let mut store = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == CLSCALE_FLAG {
                let raw = iter.next().ok_or_else(|| {
                    EngineError::InvalidArgument(format!("{CLSCALE_FLAG} needs a value"))
                })?;
                let factor: f64 = raw.parse().map_err(|_| {
                    EngineError::InvalidArgument(format!("{CLSCALE_FLAG} {raw}"))
                })?;
                store.values.insert(
                    MESH_SIZE_FACTOR_OPTION.to_string(),
                    OptionValue::Number(factor),
                );
            }
        }
        Ok(store)
    }

    /// Numeric value of an option.
    pub fn number(&self, name: &str) -> Result<f64, EngineError> {
        match self.values.get(name) {
            Some(OptionValue::Number(value)) => Ok(*value),
            Some(OptionValue::String(_)) => Err(EngineError::OptionType {
                name: name.to_string(),
                expected: "number",
            }),
            None => Err(EngineError::UnknownOption(name.to_string())),
        }
    }

    /// String value of an option.
    pub fn string(&self, name: &str) -> Result<&str, EngineError> {
        match self.values.get(name) {
            Some(OptionValue::String(value)) => Ok(value),
            Some(OptionValue::Number(_)) => Err(EngineError::OptionType {
                name: name.to_string(),
                expected: "string",
            }),
            None => Err(EngineError::UnknownOption(name.to_string())),
        }
    }

    pub fn set_number(&mut self, name: &str, value: f64) {
        self.set(name, OptionValue::Number(value));
    }

    pub fn set_string(&mut self, name: &str, value: &str) {
        self.set(name, OptionValue::String(value.to_string()));
    }

    /// Options set explicitly through the session, in name order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.overrides.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn set(&mut self, name: &str, value: OptionValue) {
        self.values.insert(name.to_string(), value.clone());
        self.overrides.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_size_factor() {
        let store = OptionStore::default();
        assert_eq!(store.number(MESH_SIZE_FACTOR_OPTION).unwrap(), 1.0);
    }

    #[test]
    fn test_clscale_sets_size_factor_among_other_args() {
        let store = OptionStore::from_args(&args(&["-nt", "4", "-clscale", "0.25"])).unwrap();
        assert_eq!(store.number(MESH_SIZE_FACTOR_OPTION).unwrap(), 0.25);
    }

    #[test]
    fn test_clscale_without_value_is_rejected() {
        let err = OptionStore::from_args(&args(&["-clscale"])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_clscale_with_garbage_is_rejected() {
        let err = OptionStore::from_args(&args(&["-clscale", "fine"])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_type_mismatch_reported() {
        let mut store = OptionStore::default();
        store.set_string("Geometry.OCCTargetUnit", "CM");
        assert_eq!(store.string("Geometry.OCCTargetUnit").unwrap(), "CM");
        assert!(matches!(
            store.number("Geometry.OCCTargetUnit"),
            Err(EngineError::OptionType { .. })
        ));
        assert!(matches!(
            store.number("Mesh.Nope"),
            Err(EngineError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_only_explicit_sets_are_overrides() {
        let mut store = OptionStore::from_args(&args(&["-clscale", "2"])).unwrap();
        store.set_string("Geometry.OCCTargetUnit", "CM");
        let names: Vec<_> = store.overrides().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Geometry.OCCTargetUnit"]);
    }
}
