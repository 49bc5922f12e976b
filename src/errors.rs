use thiserror::Error;

#[derive(Error, Debug)]
pub enum Errcode {
    // Compile errors from the external compiler are surfaced as-is,
    // the host decides how to display them.
    #[error(transparent)]
    Compile(#[from] Box<grass::Error>),

    #[error("css printing failed: {0}")]
    Css(String),

    #[error("source map generation failed: {0}")]
    SourceMap(String),
}

impl From<parcel_sourcemap::SourceMapError> for Errcode {
    fn from(value: parcel_sourcemap::SourceMapError) -> Self {
        Errcode::SourceMap(format!("{value:?}"))
    }
}
