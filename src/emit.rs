//! Stylesheet Emission - Config In, Partial Text Out
//!
//! Pure function of the configuration: the same config always renders the
//! same bytes, in either dialect.

use std::fmt::Display;

use crate::config::{GridConfig, OutputStyle};

/// Render the grid partial for `config` in its selected dialect.
pub fn render(config: &GridConfig) -> String {
    let mut w = StyleWriter::new(config.output_style);

    w.comment("Generated grid partial. Regenerated from the breakpoint configuration. Do not edit by hand.");

    w.blank();
    w.open(".wrapper");
    w.decl("max-width", &config.container.max_width);
    w.decl("margin", "0 auto");
    w.decl("padding-left", &config.container.fields);
    w.decl("padding-right", &config.container.fields);
    w.close();

    w.blank();
    w.open(".row");
    w.decl("display", "flex");
    w.decl("flex-wrap", "wrap");
    w.close();

    for span in 1..=config.columns {
        w.blank();
        w.open(&format!(".col-{span}"));
        w.decl("width", format_percent(config.columns, span));
        w.close();
    }

    // Widest first, so narrower queries override in source order.
    for bp in config.resolved_breakpoints() {
        w.blank();
        w.open(&format!("@media screen and (max-width: {})", bp.width));
        w.open(".wrapper");
        w.decl("max-width", &bp.width);
        w.decl("padding-left", &bp.fields);
        w.decl("padding-right", &bp.fields);
        w.close();
        w.close();
    }

    w.finish()
}

/// `100 / columns * span` percent, at most five decimals, trailing zeros
/// trimmed (12 columns, span 1 -> `8.33333%`).
fn format_percent(columns: u32, span: u32) -> String {
    let pct = 100.0 * span as f64 / columns as f64;
    let fixed = format!("{pct:.5}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// One writer for both dialects: braces and semicolons for SCSS,
/// significant indentation for Sass.
struct StyleWriter {
    style: OutputStyle,
    out: String,
    depth: usize,
}

impl StyleWriter {
    fn new(style: OutputStyle) -> Self {
        Self {
            style,
            out: String::new(),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    // "//" comments are valid in both dialects.
    fn comment(&mut self, text: &str) {
        self.indent();
        self.out.push_str("// ");
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, selector: &str) {
        self.indent();
        self.out.push_str(selector);
        match self.style {
            OutputStyle::Scss => self.out.push_str(" {\n"),
            OutputStyle::Sass => self.out.push('\n'),
        }
        self.depth += 1;
    }

    fn decl(&mut self, property: &str, value: impl Display) {
        self.indent();
        self.out.push_str(property);
        self.out.push_str(": ");
        self.out.push_str(&value.to_string());
        match self.style {
            OutputStyle::Scss => self.out.push_str(";\n"),
            OutputStyle::Sass => self.out.push('\n'),
        }
    }

    fn close(&mut self) {
        self.depth -= 1;
        if self.style == OutputStyle::Scss {
            self.indent();
            self.out.push_str("}\n");
        }
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_config(style: &str) -> GridConfig {
        serde_json::from_str(&format!(
            r#"{{
                "outputStyle": "{style}",
                "columns": 12,
                "container": {{ "maxWidth": "1200px", "fields": "30px" }},
                "breakPoints": {{
                    "lg": {{ "width": "1100px" }},
                    "md": {{ "width": "960px" }},
                    "sm": {{ "width": "780px", "fields": "15px" }},
                    "xs": {{ "width": "560px" }}
                }}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(12, 1), "8.33333%");
        assert_eq!(format_percent(12, 6), "50%");
        assert_eq!(format_percent(12, 12), "100%");
        assert_eq!(format_percent(4, 1), "25%");
        assert_eq!(format_percent(3, 1), "33.33333%");
    }

    #[test]
    fn scss_dialect_uses_braces_and_semicolons() {
        let out = render(&example_config("scss"));
        assert!(out.contains(".wrapper {"));
        assert!(out.contains("max-width: 1200px;"));
        assert!(out.contains(".col-1 {\n  width: 8.33333%;\n}"));
    }

    #[test]
    fn sass_dialect_is_indentation_only() {
        let out = render(&example_config("sass"));
        assert!(!out.contains('{'));
        assert!(!out.contains(';'));
        assert!(out.contains(".wrapper\n  max-width: 1200px\n"));
        assert!(out.contains("@media screen and (max-width: 1100px)\n  .wrapper\n    max-width: 1100px\n"));
    }

    #[test]
    fn media_blocks_descend_by_width() {
        let out = render(&example_config("scss"));
        let positions: Vec<_> = ["1100px", "960px", "780px", "560px"]
            .iter()
            .map(|w| {
                out.find(&format!("@media screen and (max-width: {w})"))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn fields_override_applies_only_where_set() {
        let out = render(&example_config("scss"));
        let blocks: Vec<&str> = out.split("@media").skip(1).collect();
        assert_eq!(blocks.len(), 4);

        // sm overrides to 15px; the rest inherit the container's 30px.
        assert!(blocks[2].contains("padding-left: 15px;"));
        for block in [blocks[0], blocks[1], blocks[3]] {
            assert!(block.contains("padding-left: 30px;"));
        }
    }
}
