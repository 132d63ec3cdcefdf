//! Child environment assembly.
//!
//! The child inherits the launcher's environment. On top of that, overrides
//! are always applied and defaults fill in only what the caller left unset.

use crate::config::EnvConfig;
use std::collections::BTreeMap;
use std::path::Path;

/// Variables to layer over the inherited environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildEnv {
    overrides: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl ChildEnv {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the layer from config, pointing the module path at `root`.
    pub fn from_config(config: &EnvConfig, root: &Path) -> Self {
        let mut env = Self {
            overrides: config.overrides.clone(),
            defaults: config.defaults.clone(),
        };
        if let Some(var) = &config.module_path_var {
            env.overrides
                .insert(var.clone(), root.to_string_lossy().to_string());
        }
        env
    }

    /// The variables to set on the child, given a lookup into the caller's
    /// environment.
    ///
    /// A variable the caller set, even to an empty string, keeps its value.
    pub fn resolve<F>(&self, lookup: F) -> BTreeMap<String, String>
    where
        F: Fn(&str) -> bool,
    {
        let mut vars: BTreeMap<String, String> = self
            .defaults
            .iter()
            .filter(|(key, _)| !lookup(key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        vars.extend(
            self.overrides
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        vars
    }

    /// [`resolve`](Self::resolve) against the launcher's own environment.
    pub fn resolve_from_process(&self) -> BTreeMap<String, String> {
        self.resolve(|key| std::env::var_os(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn caller(vars: &[&str]) -> impl Fn(&str) -> bool {
        let set: HashSet<String> = vars.iter().map(|s| s.to_string()).collect();
        move |key: &str| set.contains(key)
    }

    #[test]
    fn defaults_fill_unset_variables() {
        let env = ChildEnv::from_config(&EnvConfig::default(), Path::new("/opt/docs"));
        let vars = env.resolve(caller(&[]));

        assert_eq!(vars["PLANTUML_SERVER"], "http://localhost:8080");
        assert_eq!(vars["PYTHONUNBUFFERED"], "1");
        assert_eq!(vars["PYTHONPATH"], "/opt/docs");
    }

    #[test]
    fn caller_value_beats_default() {
        let env = ChildEnv::from_config(&EnvConfig::default(), Path::new("/opt/docs"));
        let vars = env.resolve(caller(&["PLANTUML_SERVER"]));

        assert!(!vars.contains_key("PLANTUML_SERVER"));
    }

    #[test]
    fn overrides_beat_caller_values() {
        let env = ChildEnv::from_config(&EnvConfig::default(), Path::new("/opt/docs"));
        let vars = env.resolve(caller(&["PYTHONUNBUFFERED", "PYTHONPATH"]));

        assert_eq!(vars["PYTHONUNBUFFERED"], "1");
        assert_eq!(vars["PYTHONPATH"], "/opt/docs");
    }

    #[test]
    fn module_path_var_can_be_disabled() {
        let config = EnvConfig {
            module_path_var: None,
            ..Default::default()
        };
        let vars = ChildEnv::from_config(&config, Path::new("/opt/docs")).resolve(caller(&[]));
        assert!(!vars.contains_key("PYTHONPATH"));
    }

    fn owned(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn layer(overrides: &[(&str, &str)], defaults: &[(&str, &str)]) -> ChildEnv {
        let config = EnvConfig {
            overrides: owned(overrides),
            defaults: owned(defaults),
            module_path_var: None,
        };
        ChildEnv::from_config(&config, Path::new("/opt/docs"))
    }

    #[test]
    fn override_wins_over_default_for_same_key() {
        let env = layer(&[("MODE", "forced")], &[("MODE", "default")]);

        assert_eq!(env.resolve(caller(&[]))["MODE"], "forced");
        assert_eq!(env.resolve(caller(&["MODE"]))["MODE"], "forced");
    }

    #[test]
    fn process_lookup_respects_real_environment() {
        let env = layer(
            &[],
            &[
                ("PATH", "/should/not/apply"),
                ("DOCLAUNCH_TEST_SURELY_UNSET_VAR", "applied"),
            ],
        );

        let vars = env.resolve_from_process();
        assert!(!vars.contains_key("PATH"));
        assert_eq!(vars["DOCLAUNCH_TEST_SURELY_UNSET_VAR"], "applied");
    }
}
