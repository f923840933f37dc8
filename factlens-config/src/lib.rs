//! Loader for factlens configuration with YAML + environment overlays.
//!
//! Sources are merged in the order they are attached, with
//! `FACTLENS_`-prefixed environment variables applied last so they win over
//! files. Nested keys use `__` as separator, e.g.
//! `FACTLENS_CLASSIFIER__KIND=model`. After merging, `${VAR}` placeholders in
//! string values are expanded from the process environment.
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "FACTLENS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactlensConfig {
    #[serde(default, deserialize_with = "string_or_number")]
    pub version: Option<String>,
    #[serde(default)]
    pub classifier: ClassifierSpec,
    /// Replaces the built-in fact-checking services when present.
    #[serde(default)]
    pub fact_checkers: Option<Vec<FactCheckerSpec>>,
    #[serde(default)]
    pub logging: LoggingSpec,
}

/// Which classification strategy to build. The tag is `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClassifierSpec {
    Keywords {
        #[serde(default)]
        keywords: Option<Vec<String>>,
    },
    Model {
        #[serde(default)]
        corpus: Option<Vec<CorpusEntry>>,
    },
}

impl Default for ClassifierSpec {
    fn default() -> Self {
        Self::Keywords { keywords: None }
    }
}

/// One labeled training row; `label` is `FAKE` or `REAL`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorpusEntry {
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FactCheckerSpec {
    pub name: String,
    /// Search URL containing exactly one `{query}` placeholder.
    pub url_template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingSpec {
    #[serde(default)]
    pub dir: Option<String>,
    /// `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub stderr: Option<bool>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

/// `<config_dir>/factlens/factlens.yaml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("factlens").join("factlens.yaml"))
}

// YAML readers turn `version: 1` into a number; accept both spellings.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(de)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (files + env overrides).
pub struct FactlensConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for FactlensConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FactlensConfigLoader {
    /// Start empty; environment overrides are attached by [`Self::load`].
    ///
    /// ```
    /// use factlens_config::{ClassifierSpec, FactlensConfigLoader};
    ///
    /// let config = FactlensConfigLoader::new()
    ///     .with_yaml_str("version: '1'")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.version.as_deref(), Some("1"));
    /// assert_eq!(config.classifier, ClassifierSpec::Keywords { keywords: None });
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a required YAML/TOML/JSON file; the format is inferred by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that may be absent, e.g. the per-user default.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use factlens_config::{ClassifierSpec, FactlensConfigLoader};
    ///
    /// let cfg = FactlensConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// classifier:
    ///   kind: model
    ///   corpus:
    ///     - { text: "miracle cure exposed", label: FAKE }
    ///     - { text: "council passes budget", label: REAL }
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// match cfg.classifier {
    ///     ClassifierSpec::Model { corpus: Some(rows) } => assert_eq!(rows.len(), 2),
    ///     other => panic!("unexpected classifier: {other:?}"),
    /// }
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    ///
    /// ```
    /// use factlens_config::FactlensConfigLoader;
    ///
    /// unsafe { std::env::set_var("FACTCHECK_HOST", "factcheck.example.org"); }
    ///
    /// let config = FactlensConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// fact_checkers:
    ///   - name: "Internal"
    ///     url_template: "https://${FACTCHECK_HOST}/search?q={query}"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// let checkers = config.fact_checkers.expect("checkers configured");
    /// assert_eq!(
    ///     checkers[0].url_template,
    ///     "https://factcheck.example.org/search?q={query}"
    /// );
    ///
    /// unsafe { std::env::remove_var("FACTCHECK_HOST"); }
    /// ```
    pub fn load(self) -> Result<FactlensConfig, ConfigError> {
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("FOO", Some("bar"), || {
            let mut v = json!("prefix-${FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_inside_nested_corpus_rows() {
        temp_env::with_var("FL_LABEL", Some("FAKE"), || {
            let mut v = json!({
                "classifier": {
                    "kind": "model",
                    "corpus": [{ "text": "miracle", "label": "${FL_LABEL}" }, 7, null]
                }
            });
            expand_env_in_value(&mut v);
            assert_eq!(v["classifier"]["corpus"][0]["label"], json!("FAKE"));
            assert_eq!(v["classifier"]["corpus"][1], json!(7));
        });
    }

    #[test]
    fn cyclic_references_terminate() {
        temp_env::with_vars([("FL_A", Some("${FL_B}")), ("FL_B", Some("${FL_A}"))], || {
            let mut v = json!("x=${FL_A}-y");
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${FACTLENS_DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${FACTLENS_DOES_NOT_EXIST}"));
    }

    #[test]
    fn numeric_version_becomes_string() {
        let cfg: FactlensConfig = serde_json::from_value(json!({ "version": 2 })).unwrap();
        assert_eq!(cfg.version.as_deref(), Some("2"));
    }

    #[test]
    fn default_path_ends_with_app_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("factlens/factlens.yaml"));
        }
    }
}
