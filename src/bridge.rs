//! Page-side glue: the script injected into every document and the IPC
//! messages it sends back.
//!
//! The page captures key presses that match a bound shortcut and posts
//! `{"cmd":"shortcut","keys":"Ctrl+R"}` through `window.ipc`.

use serde::Deserialize;

use crate::managers::shortcut_manager::ShortcutManager;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};

const BRIDGE_JS: &str = include_str!("../resources/ui/bridge.js");

/// Messages the injected script can send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BridgeMessage {
    Shortcut { keys: String },
}

/// Parses an IPC body. Unknown or malformed messages yield `None`.
pub fn parse_message(body: &str) -> Option<BridgeMessage> {
    match serde_json::from_str(body) {
        Ok(msg) => Some(msg),
        Err(e) => {
            tracing::debug!(error = %e, "unrecognized IPC message");
            None
        }
    }
}

/// Encodes a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// The initialization script: bound key combinations followed by the
/// keyboard listener.
pub fn init_script(shortcuts: &ShortcutManager) -> String {
    let keys: Vec<&str> = shortcuts.bindings().into_iter().map(|(_, k)| k).collect();
    let json = serde_json::to_string(&keys).unwrap_or_else(|_| "[]".to_string());
    format!("window.__LV_BINDINGS={};\n{}", json, BRIDGE_JS)
}

/// Script that shows a short-lived toast in the page.
pub fn toast_script(title: &str, body: &str, theme: &ThemeEngine) -> String {
    format!(
        r#"(function(){{
var d=document;if(!d.body)return;
var s=d.getElementById('__lv_toast_css');
if(!s){{s=d.createElement('style');s.id='__lv_toast_css';s.textContent={css};(d.head||d.documentElement).appendChild(s);}}
var t=d.getElementById('__lv_toast');
if(!t){{t=d.createElement('div');t.id='__lv_toast';d.body.appendChild(t);}}
t.textContent='';var b=d.createElement('b');b.textContent={title};t.appendChild(b);t.appendChild(d.createTextNode({body}));
t.classList.add('on');clearTimeout(window.__lv_toast_timer);
window.__lv_toast_timer=setTimeout(function(){{t.classList.remove('on');}},2500);
}})();"#,
        css = js_string(&theme.toast_stylesheet()),
        title = js_string(title),
        body = js_string(body),
    )
}

/// Script that copies `url` to the clipboard and confirms with a toast.
///
/// Uses the async clipboard API when the page may, and falls back to a
/// hidden textarea with `execCommand('copy')`.
pub fn copy_url_script(url: &str, theme: &ThemeEngine) -> String {
    format!(
        r#"(function(){{
var u={url};
function fallback(){{
var a=document.createElement('textarea');a.value=u;a.setAttribute('readonly','');
a.style.position='fixed';a.style.opacity='0';document.body.appendChild(a);a.select();
try{{document.execCommand('copy');}}catch(e){{}}
document.body.removeChild(a);
}}
if(navigator.clipboard&&navigator.clipboard.writeText){{navigator.clipboard.writeText(u).catch(fallback);}}else{{fallback();}}
}})();
{toast}"#,
        url = js_string(url),
        toast = toast_script("URL copied", url, theme),
    )
}
