//! Navigation Gate. Decides whether the webview may commit a navigation.
//!
//! A request is allowed when its URL starts with the configured base URL, or
//! when its host matches the trusted suffix. Everything else is blocked and
//! logged. The gate holds no mutable state; the same request always yields
//! the same decision.

use tracing::{debug, warn};
use url::Url;

use crate::types::errors::GateConfigError;
use crate::types::navigation::{NavigationDecision, NavigationRequest, SuffixMatch};

/// Trait defining navigation gate operations.
pub trait NavigationGateTrait {
    /// Applies the allow-list rules without logging.
    fn decide(&self, request: &NavigationRequest) -> NavigationDecision;

    /// Decides a navigation the webview is about to commit and logs the
    /// outcome. Blocks are logged at warn level.
    fn evaluate(&self, request: &NavigationRequest) -> NavigationDecision {
        let decision = self.decide(request);
        if decision.is_allowed() {
            debug!(url = %request.url, frame = ?request.frame, decision = ?decision, "navigation allowed");
        } else {
            warn!(url = %request.url, frame = ?request.frame, "[BLOCKED] navigation");
        }
        decision
    }

    fn is_allowed(&self, request: &NavigationRequest) -> bool {
        self.evaluate(request).is_allowed()
    }

    fn config(&self) -> &GateConfig;
}

/// Validated allow-list configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    allowed_base: String,
    trusted_suffix: String,
    suffix_match: SuffixMatch,
}

impl GateConfig {
    /// Builds a config from raw settings values.
    ///
    /// The base URL is normalized the way the webview serializes URLs, so a
    /// prefix comparison against reported URLs is meaningful. The suffix is
    /// lowercased and stripped of surrounding dots.
    pub fn new(
        allowed_base: &str,
        trusted_suffix: &str,
        suffix_match: SuffixMatch,
    ) -> Result<Self, GateConfigError> {
        let base = Url::parse(allowed_base.trim()).map_err(|e| GateConfigError::InvalidBaseUrl {
            url: allowed_base.to_string(),
            reason: e.to_string(),
        })?;
        if base.host_str().is_none() {
            return Err(GateConfigError::InvalidBaseUrl {
                url: allowed_base.to_string(),
                reason: "URL has no host".to_string(),
            });
        }

        let suffix = trusted_suffix.trim().trim_matches('.').to_ascii_lowercase();
        let valid_suffix = !suffix.is_empty()
            && !suffix.contains("..")
            && suffix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if !valid_suffix {
            return Err(GateConfigError::InvalidSuffix(trusted_suffix.to_string()));
        }

        Ok(Self {
            allowed_base: base.as_str().to_string(),
            trusted_suffix: suffix,
            suffix_match,
        })
    }

    pub fn allowed_base(&self) -> &str {
        &self.allowed_base
    }

    pub fn trusted_suffix(&self) -> &str {
        &self.trusted_suffix
    }

    pub fn suffix_match(&self) -> SuffixMatch {
        self.suffix_match
    }
}

/// Stateless allow-list predicate over a fixed [`GateConfig`].
#[derive(Debug, Clone)]
pub struct NavigationGate {
    config: GateConfig,
}

impl NavigationGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Serialized form used for the prefix check. Unparseable input is
    /// compared verbatim.
    fn normalized(url: &str) -> (String, Option<Url>) {
        match Url::parse(url) {
            Ok(parsed) => (parsed.as_str().to_string(), Some(parsed)),
            Err(_) => (url.to_string(), None),
        }
    }

    fn host_matches(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        let suffix = self.config.trusted_suffix.as_str();
        match self.config.suffix_match {
            // plain string suffix, so `xproton.me.` does not match
            SuffixMatch::Legacy => host.ends_with(suffix),
            SuffixMatch::LabelBoundary => {
                let host = host.trim_end_matches('.');
                host == suffix
                    || (host.len() > suffix.len()
                        && host.ends_with(suffix)
                        && host.as_bytes()[host.len() - suffix.len() - 1] == b'.')
            }
        }
    }
}

impl NavigationGateTrait for NavigationGate {
    fn decide(&self, request: &NavigationRequest) -> NavigationDecision {
        let (serialized, parsed) = Self::normalized(&request.url);

        if serialized.starts_with(&self.config.allowed_base) {
            return NavigationDecision::AllowBase;
        }

        let host = parsed.as_ref().and_then(|u| u.host_str());
        if host.is_some_and(|h| self.host_matches(h)) {
            return NavigationDecision::AllowTrustedHost;
        }

        NavigationDecision::Block
    }

    fn config(&self) -> &GateConfig {
        &self.config
    }
}
