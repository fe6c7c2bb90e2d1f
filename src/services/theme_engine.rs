//! Theme Engine: the shell's dark palette and the CSS derived from it.

use std::collections::BTreeMap;

/// Dark palette applied to the window, the webview background and injected UI.
pub struct DarkPalette;
impl DarkPalette {
    pub const WINDOW: &'static str = "#0d0d0d";
    pub const WINDOW_TEXT: &'static str = "#e6e6e6";
    pub const BASE: &'static str = "#1e1e1e";
    pub const ALTERNATE_BASE: &'static str = "#2c2c2c";
    pub const BUTTON: &'static str = "#333333";
    pub const BRIGHT_TEXT: &'static str = "#ff5555";
    pub const HIGHLIGHT: &'static str = "#80cbc4";
    pub const HIGHLIGHTED_TEXT: &'static str = "#0d0d0d";
}

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn get_css_variables(&self) -> BTreeMap<String, String>;
    fn background_rgba(&self) -> (u8, u8, u8, u8);
    fn toast_stylesheet(&self) -> String;
}

/// Parses `#rgb` or `#rrggbb` into components.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

/// The theme engine implementation. The shell only ships a dark theme.
#[derive(Debug, Default)]
pub struct ThemeEngine;

impl ThemeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn get_css_variables(&self) -> BTreeMap<String, String> {
        [
            ("--lv-window", DarkPalette::WINDOW),
            ("--lv-text", DarkPalette::WINDOW_TEXT),
            ("--lv-base", DarkPalette::BASE),
            ("--lv-alternate", DarkPalette::ALTERNATE_BASE),
            ("--lv-border", DarkPalette::BUTTON),
            ("--lv-bright-text", DarkPalette::BRIGHT_TEXT),
            ("--lv-highlight", DarkPalette::HIGHLIGHT),
            ("--lv-highlighted-text", DarkPalette::HIGHLIGHTED_TEXT),
            ("--lv-radius", "4px"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn background_rgba(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = parse_hex_color(DarkPalette::WINDOW).unwrap_or((0, 0, 0));
        (r, g, b, 255)
    }

    fn toast_stylesheet(&self) -> String {
        let vars: String = self
            .get_css_variables()
            .iter()
            .map(|(k, v)| format!("{}:{};", k, v))
            .collect();
        format!(
            "#__lv_toast{{{vars}position:fixed;right:16px;bottom:16px;z-index:2147483647;\
             max-width:60vw;padding:10px 14px;background:var(--lv-base);color:var(--lv-text);\
             border:1px solid var(--lv-border);border-left:3px solid var(--lv-highlight);\
             border-radius:var(--lv-radius);font:13px/1.4 sans-serif;word-break:break-all;\
             box-shadow:0 3px 8px rgba(0,0,0,.5);opacity:0;transition:opacity 200ms}}\
             #__lv_toast.on{{opacity:1}}#__lv_toast b{{display:block;color:var(--lv-highlight)}}"
        )
    }
}
