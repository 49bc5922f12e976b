use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A config field that users may write as a bare string or as a list.
/// Canonical form is always the `List` variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    Single(String),
    List(Vec<String>),
}

impl PathList {
    pub fn as_slice(&self) -> &[String] {
        match self {
            PathList::Single(path) => std::slice::from_ref(path),
            PathList::List(paths) => paths.as_slice(),
        }
    }

    fn into_list(self) -> PathList {
        match self {
            PathList::Single(path) => PathList::List(vec![path]),
            list => list,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<PathList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathList>,
}

static SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "description": "Configuration of the SCSS bundling engine",
        "type": "object",
        "properties": {
            "main": {
                "description": "Absolute path to an SCSS file (or a list of those), bundled in order into main.css. Files with a .css extension are spliced in verbatim.",
                "anyOf": [
                    { "type": "string" },
                    { "type": "array", "items": { "type": "string" } }
                ]
            },
            "paths": {
                "description": "Absolute path to a directory (or a list of those) searched when resolving @import directives",
                "anyOf": [
                    { "type": "string" },
                    { "type": "array", "items": { "type": "string" } }
                ]
            }
        },
        "additionalProperties": false
    })
});

pub fn schema() -> &'static Value {
    &SCHEMA
}

pub fn default_config() -> EngineConfig {
    EngineConfig {
        main: Some(PathList::List(vec![])),
        paths: Some(PathList::List(vec![])),
    }
}

/// Coerce both fields to their list form. An absent field stays absent,
/// defaults are the host's job (merged in before this is ever called).
pub fn preprocess_config(config: EngineConfig) -> EngineConfig {
    EngineConfig {
        main: config.main.map(PathList::into_list),
        paths: config.paths.map(PathList::into_list),
    }
}

/// Every path whose change should trigger a rebuild: main entries first,
/// then import directories, duplicates kept. Watching itself is host-side.
pub fn watched(config: &EngineConfig) -> Vec<String> {
    let mut paths = entries(&config.main).to_vec();
    paths.extend_from_slice(entries(&config.paths));
    paths
}

pub(crate) fn entries(field: &Option<PathList>) -> &[String] {
    field.as_ref().map(PathList::as_slice).unwrap_or_default()
}
