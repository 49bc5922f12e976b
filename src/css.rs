//! Final CSS stage: minification and source-map printing through
//! lightningcss.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use parcel_sourcemap::SourceMap;

use crate::engine::OUTPUT_MAP;
use crate::errors::Errcode;

/// Minify `css` and return it together with a JSON source map. The map
/// embeds the source content under `name` instead of referencing it by
/// path, and the returned CSS ends with a `sourceMappingURL` comment
/// pointing at the map artifact.
pub fn print_with_map(name: &str, css: &str) -> Result<(String, String), Errcode> {
    let mut parser_opts = ParserOptions::default();
    parser_opts.filename = name.to_string();
    let mut stylesheet =
        StyleSheet::parse(css, parser_opts).map_err(|e| Errcode::Css(e.to_string()))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| Errcode::Css(e.to_string()))?;

    let mut source_map = SourceMap::new("/");
    source_map.add_source(name);
    source_map.set_source_content(0, css)?;

    let mut printer_opts = PrinterOptions::default();
    printer_opts.minify = true;
    printer_opts.source_map = Some(&mut source_map);
    let res = stylesheet
        .to_css(printer_opts)
        .map_err(|e| Errcode::Css(e.to_string()))?;

    let map = source_map.to_json(None)?;
    let mut code = res.code;
    code.push_str(&format!("\n/*# sourceMappingURL={OUTPUT_MAP} */"));
    Ok((code, map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_and_links_the_map() {
        let (css, map) = print_with_map("bundle.scss", ".a {\n  color: red;\n}\n").unwrap();
        assert!(css.starts_with(".a{color:red}"), "unexpected css: {css}");
        assert!(css.ends_with("/*# sourceMappingURL=main.css.map */"));

        let map: serde_json::Value = serde_json::from_str(&map).unwrap();
        assert_eq!(map["version"], 3);
        assert_eq!(map["sources"][0], "bundle.scss");
    }

    #[test]
    fn empty_input_still_produces_both_outputs() {
        let (css, map) = print_with_map("bundle.scss", "").unwrap();
        assert!(css.contains("sourceMappingURL"));
        assert!(!map.is_empty());
    }

    #[test]
    fn invalid_css_is_reported() {
        // Malformed declarations get preserved as raw tokens, only
        // rule-level garbage is rejected by the parser.
        let result = print_with_map("bundle.scss", "@!garbage {{{");
        assert!(matches!(result, Err(Errcode::Css(_))));
    }
}
