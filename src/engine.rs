use std::collections::HashMap;

use serde_json::Value;

use crate::config::{self, EngineConfig};
use crate::css;
use crate::errors::Errcode;

pub const OUTPUT_CSS: &str = "main.css";
pub const OUTPUT_MAP: &str = "main.css.map";

// Synthetic name of the aggregate entry document, only ever shown in
// diagnostics and in the source map.
const ENTRY_FILENAME: &str = "bundle.scss";

/// Plugin surface consumed by the host orchestrator.
// Hosts await run futures where they build; no Send bound is imposed.
#[allow(async_fn_in_trait)]
pub trait Engine {
    fn schema(&self) -> &'static Value;
    fn default_config(&self) -> EngineConfig;
    fn preprocess_config(&self, config: EngineConfig) -> EngineConfig;
    fn watched(&self, config: &EngineConfig) -> Vec<String>;
    async fn run(&self, config: &EngineConfig) -> Result<HashMap<String, String>, Errcode>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScssEngine;

impl ScssEngine {
    fn get_grass_options(&self, load_paths: &[String]) -> grass::Options<'_> {
        grass::Options::default()
            .style(grass::OutputStyle::Expanded)
            .load_paths(load_paths)
    }
}

/// One import line per entry, in config order. Entries with a `.css`
/// extension are imported extensionless so the compiler splices their
/// text verbatim instead of re-parsing it as SCSS.
fn entry_document(main: &[String]) -> String {
    main.iter()
        .map(|file| match file.strip_suffix(".css") {
            Some(inline) => format!("@import \"{inline}\";"),
            None => format!("@import \"{file}\";"),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

impl Engine for ScssEngine {
    fn schema(&self) -> &'static Value {
        config::schema()
    }

    fn default_config(&self) -> EngineConfig {
        config::default_config()
    }

    fn preprocess_config(&self, config: EngineConfig) -> EngineConfig {
        config::preprocess_config(config)
    }

    fn watched(&self, config: &EngineConfig) -> Vec<String> {
        config::watched(config)
    }

    /// Compile the configured entries into the `main.css` /
    /// `main.css.map` artifact set. Expects host-merged canonical
    /// config; compiler failures fail the returned future untouched.
    async fn run(&self, config: &EngineConfig) -> Result<HashMap<String, String>, Errcode> {
        let load_paths = config::entries(&config.paths);
        let source = entry_document(config::entries(&config.main));
        log::debug!("SCSS load paths: {load_paths:?}");
        log::debug!("Entry document:\n{source}");

        let css = grass::from_string(source, &self.get_grass_options(load_paths))?;
        let (css, map) = css::print_with_map(ENTRY_FILENAME, &css)?;
        log::trace!("Generated {} bytes of CSS, {} bytes of map", css.len(), map.len());

        Ok(HashMap::from([
            (OUTPUT_CSS.to_string(), css),
            (OUTPUT_MAP.to_string(), map),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scss_entries_import_the_verbatim_path() {
        let doc = entry_document(&["/x/style.scss".to_string()]);
        assert_eq!(doc, "@import \"/x/style.scss\";");
    }

    #[test]
    fn css_entries_use_the_inline_form() {
        let doc = entry_document(&["/x/plain.css".to_string()]);
        assert_eq!(doc, "@import \"/x/plain\";");
    }

    #[test]
    fn mixed_entries_keep_config_order() {
        let doc = entry_document(&["/x/a.scss".to_string(), "/x/b.css".to_string()]);
        assert_eq!(doc, "@import \"/x/a.scss\";\n@import \"/x/b\";");
    }

    #[test]
    fn no_entries_produce_an_empty_document() {
        assert_eq!(entry_document(&[]), "");
    }

    #[test]
    fn engine_exposes_schema_and_defaults() {
        let engine = ScssEngine;
        assert!(engine.schema()["properties"]["main"].is_object());
        assert_eq!(engine.default_config(), config::default_config());
        assert_eq!(
            engine.preprocess_config(engine.default_config()),
            engine.default_config()
        );
    }
}
