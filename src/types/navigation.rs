use serde::{Deserialize, Serialize};

/// Which frame of the webview a navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    TopLevel,
    SubFrame,
}

/// A single navigation attempt raised by the webview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
    pub frame: FrameKind,
}

impl NavigationRequest {
    pub fn new(url: impl Into<String>, frame: FrameKind) -> Self {
        Self {
            url: url.into(),
            frame,
        }
    }

    pub fn top_level(url: impl Into<String>) -> Self {
        Self::new(url, FrameKind::TopLevel)
    }
}

/// Outcome of evaluating a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// The URL starts with the configured base URL.
    AllowBase,
    /// The URL's host matches the trusted suffix.
    AllowTrustedHost,
    Block,
}

impl NavigationDecision {
    pub fn is_allowed(self) -> bool {
        !matches!(self, NavigationDecision::Block)
    }
}

/// How the trusted suffix is compared against a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixMatch {
    /// Host equals the suffix or ends with `.` + suffix.
    #[default]
    LabelBoundary,
    /// Plain string suffix; `notproton.me` matches `proton.me`.
    Legacy,
}
