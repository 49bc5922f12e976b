//! SCSS bundling engine, pluggable into a site/asset build orchestrator.
//!
//! The host merges user configuration with [`config::default_config`],
//! canonicalizes it through [`config::preprocess_config`], watches the paths
//! reported by [`config::watched`], and awaits [`Engine::run`] to obtain the
//! `main.css` / `main.css.map` artifact set. All artifact I/O belongs to the
//! host; this crate never touches the output filesystem.

pub mod config;
mod css;
pub mod engine;
pub mod errors;

pub use config::{EngineConfig, PathList};
pub use engine::{Engine, ScssEngine, OUTPUT_CSS, OUTPUT_MAP};
pub use errors::Errcode;
