//! # Validate Subcommand
//!
//! Loads a document and checks it against [`person_shape`]. The format is
//! chosen by extension: `.yaml`/`.yml` for YAML, anything else as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use typeguard_core::{ValidationEntry, Value};

use crate::person_shape;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (`.json`, `.yaml` or `.yml`).
    pub file: PathBuf,

    /// Print the expected shape before validating.
    #[arg(long)]
    pub describe: bool,
}

/// Execute the validate subcommand. Returns 1 when the document does not
/// match the shape.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let shape = person_shape();
    if args.describe {
        println!("{shape}");
    }

    let document = load_document(&args.file)?;
    let value = Value::from(document);
    match shape.perform(&ValidationEntry::parameter(0, &value)) {
        Ok(()) => {
            println!("OK: {}", args.file.display());
            Ok(0)
        }
        Err(err) => {
            tracing::debug!(path = %args.file.display(), error = %err, "document rejected");
            println!("FAIL: {}", args.file.display());
            println!("  {err}");
            Ok(1)
        }
    }
}

/// Read and parse a JSON or YAML document.
pub fn load_document(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML: {}", path.display()))?;
            yaml_to_json_value(&yaml).map_err(|reason| {
                anyhow::anyhow!("YAML-to-JSON conversion failed for {}: {reason}", path.display())
            })
        }
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON: {}", path.display())),
    }
}

/// Convert a `serde_yaml::Value` tree into the equivalent JSON tree. Tags
/// are dropped; map keys must be scalars.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<serde_json::Value, String> {
    use serde_json::Value as Json;

    match yaml {
        serde_yaml::Value::Null => Ok(Json::Null),
        serde_yaml::Value::Bool(b) => Ok(Json::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Json::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Json::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Json::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Json::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                object.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Json::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("name: Ada\nage: 36\ntags: [a, b]\nratio: 0.5\n1: one\n").unwrap();
        assert_eq!(
            yaml_to_json_value(&yaml).unwrap(),
            json!({"name": "Ada", "age": 36, "tags": ["a", "b"], "ratio": 0.5, "1": "one"})
        );
    }

    #[test]
    fn test_yaml_rejects_sequence_keys() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: c\n").unwrap();
        assert!(yaml_to_json_value(&yaml).is_err());
    }

    #[test]
    fn test_load_document_by_extension() {
        let yaml = write_temp(".yaml", "name: Ada\nage: 36\n");
        let json_file = write_temp(".json", r#"{"name": "Ada", "age": 36}"#);
        assert_eq!(load_document(yaml.path()).unwrap(), json!({"name": "Ada", "age": 36}));
        assert_eq!(
            load_document(json_file.path()).unwrap(),
            json!({"name": "Ada", "age": 36})
        );
    }

    #[test]
    fn test_load_document_errors() {
        let broken = write_temp(".json", "{ not json");
        let err = load_document(broken.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
        assert!(load_document(Path::new("/nonexistent/person.json")).is_err());
    }

    #[test]
    fn test_run_validate_exit_codes() {
        let good = write_temp(".yml", "name: Juanito\nage: 117\nfavoriteGame: Halo\n");
        let bad = write_temp(".json", r#"{"name": 200, "age": 300}"#);
        let run = |path: &Path| {
            run_validate(&ValidateArgs {
                file: path.to_path_buf(),
                describe: true,
            })
            .unwrap()
        };
        assert_eq!(run(good.path()), 0);
        assert_eq!(run(bad.path()), 1);
    }
}
