//! Translation table files.

use std::fs;
use std::path::{Path, PathBuf};

use super::table::{RawMessages, TranslationTable};
use crate::error::{Result, TranslateError};
use crate::language::LanguageTag;

/// What: Load a YAML translation table file.
///
/// Inputs:
/// - `path`: file whose top-level keys are language tags
///
/// Output:
/// - `TranslationTable` with nested keys flattened to dot notation
///
/// # Errors
/// - `Io` when the file cannot be read
/// - `Table` when the YAML is invalid or a message is not a scalar
///
/// Details:
/// - An empty file yields an empty table.
/// - `en_US: { app: { title: Hi } }` becomes key `app.title` of `en_US`.
pub fn load_table_file(path: &Path) -> Result<TranslationTable> {
    let contents = fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(TranslationTable::new());
    }
    parse_table_yaml(&contents).map_err(|reason| TranslateError::Table {
        path: path.to_path_buf(),
        reason,
    })
}

/// What: Load every `*.yml`/`*.yaml` file of a directory into one table.
///
/// Details:
/// - Files are read in name order; later files win on conflicting keys.
/// - Subdirectories are not searched.
///
/// # Errors
/// - `Io` when the directory or a file cannot be read
/// - `Table` for any invalid file
pub fn load_table_dir(dir: &Path) -> Result<TranslationTable> {
    let io_err = |source| TranslateError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_yaml(path))
        .collect();
    files.sort();

    let mut table = TranslationTable::new();
    for file in &files {
        table.extend(load_table_file(file)?);
    }
    tracing::debug!(
        dir = %dir.display(),
        files = files.len(),
        languages = table.len(),
        "loaded translation tables"
    );
    Ok(table)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

fn parse_table_yaml(yaml: &str) -> std::result::Result<TranslationTable, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml).map_err(|e| format!("Failed to parse YAML: {e}"))?;
    let Some(languages) = doc.as_mapping() else {
        return Err("top level must map language tags to messages".to_string());
    };

    let mut table = TranslationTable::new();
    for (language, messages) in languages {
        let Some(language) = scalar_key(language) else {
            return Err("language tags must be strings".to_string());
        };
        let mut flat = RawMessages::new();
        flatten_yaml_value(messages, "", &mut flat)?;
        table = table.with_language(LanguageTag::new(language), flat);
    }
    Ok(table)
}

fn scalar_key(key: &serde_norway::Value) -> Option<String> {
    match key {
        serde_norway::Value::String(s) => Some(s.clone()),
        serde_norway::Value::Number(n) => Some(n.to_string()),
        serde_norway::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    out: &mut RawMessages,
) -> std::result::Result<(), String> {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                let Some(key) = scalar_key(key) else {
                    return Err(format!("non-scalar key under '{prefix}'"));
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_yaml_value(val, &path, out)?;
            }
        }
        serde_norway::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        serde_norway::Value::Null => {}
        _ => return Err(format!("message '{prefix}' must be a string")),
    }
    Ok(())
}
