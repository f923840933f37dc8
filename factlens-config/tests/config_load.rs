use factlens_config::{ClassifierSpec, FactlensConfigLoader};
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

const FILE_YAML: &str = r#"
version: 0.1
classifier:
  kind: keywords
  keywords: ["shocking", "${EXTRA_KEYWORD}"]
fact_checkers:
  - name: Snopes
    url_template: "https://www.snopes.com/search/?q={query}"
logging:
  format: json
  stderr: false
  filter: debug
"#;

#[test]
#[serial]
fn loads_file_with_env_expansion() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "factlens.yaml", FILE_YAML);

    let config = temp_env::with_var("EXTRA_KEYWORD", Some("miracle"), || {
        FactlensConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config")
    });

    assert_eq!(config.version.as_deref(), Some("0.1"));
    assert_eq!(
        config.classifier,
        ClassifierSpec::Keywords {
            keywords: Some(vec!["shocking".into(), "miracle".into()])
        }
    );
    let checkers = config.fact_checkers.expect("checkers");
    assert_eq!(checkers.len(), 1);
    assert_eq!(checkers[0].name, "Snopes");
    assert_eq!(config.logging.format.as_deref(), Some("json"));
    assert_eq!(config.logging.stderr, Some(false));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "factlens.yaml", FILE_YAML);

    let config = temp_env::with_vars(
        [
            ("EXTRA_KEYWORD", Some("miracle")),
            ("FACTLENS_CLASSIFIER__KIND", Some("model")),
            ("FACTLENS_LOGGING__STDERR", Some("true")),
        ],
        || {
            FactlensConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config")
        },
    );

    assert!(matches!(config.classifier, ClassifierSpec::Model { .. }));
    assert_eq!(config.logging.stderr, Some(true));
}

#[test]
#[serial]
fn missing_optional_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = FactlensConfigLoader::new()
        .with_optional_file(tmp.path().join("absent.yaml"))
        .load()
        .expect("defaults");

    assert_eq!(config.classifier, ClassifierSpec::default());
    assert!(config.fact_checkers.is_none());
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = FactlensConfigLoader::new()
        .with_file(tmp.path().join("absent.yaml"))
        .load();
    assert!(result.is_err());
}

#[test]
#[serial]
fn unknown_classifier_kind_is_rejected() {
    let result = FactlensConfigLoader::new()
        .with_yaml_str("classifier:\n  kind: oracle\n")
        .load();
    assert!(result.is_err());
}
