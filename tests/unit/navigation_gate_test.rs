//! Unit tests for the navigation gate.
//!
//! Pins the allow/deny table for the default Lumo allow-list in both suffix
//! matching modes.

use lumo_viewer::services::navigation_gate::{GateConfig, NavigationGate, NavigationGateTrait};
use lumo_viewer::types::navigation::{
    FrameKind, NavigationDecision, NavigationRequest, SuffixMatch,
};
use lumo_viewer::types::settings::{DEFAULT_ALLOWED_BASE, DEFAULT_TRUSTED_SUFFIX};
use rstest::rstest;

fn gate(mode: SuffixMatch) -> NavigationGate {
    let config = GateConfig::new(DEFAULT_ALLOWED_BASE, DEFAULT_TRUSTED_SUFFIX, mode).unwrap();
    NavigationGate::new(config)
}

// ─── Decision table ───

#[rstest]
#[case("https://lumo.proton.me/u/18/", NavigationDecision::AllowBase)]
#[case("https://lumo.proton.me/", NavigationDecision::AllowBase)]
#[case("https://lumo.proton.me/u/18/chat?id=42#top", NavigationDecision::AllowBase)]
#[case("https://mail.proton.me/", NavigationDecision::AllowTrustedHost)]
#[case("https://account.proton.me/login?redirect=lumo", NavigationDecision::AllowTrustedHost)]
#[case("https://proton.me/", NavigationDecision::AllowTrustedHost)]
#[case("http://lumo.proton.me/", NavigationDecision::AllowTrustedHost)]
#[case("https://evil.com/", NavigationDecision::Block)]
#[case("https://notproton.me/", NavigationDecision::Block)]
#[case("https://lumo.proton.me.attacker.com/", NavigationDecision::Block)]
#[case("https://proton.me.evil.com/", NavigationDecision::Block)]
#[case("https://evil.com/?next=https://lumo.proton.me/", NavigationDecision::Block)]
#[case("about:blank", NavigationDecision::Block)]
#[case("https://mail.proton.me./", NavigationDecision::AllowTrustedHost)]
#[case("https://xproton.me./", NavigationDecision::Block)]
fn test_label_boundary_table(#[case] url: &str, #[case] expected: NavigationDecision) {
    let g = gate(SuffixMatch::LabelBoundary);
    assert_eq!(g.evaluate(&NavigationRequest::top_level(url)), expected, "{}", url);
}

#[rstest]
#[case("https://notproton.me/", true)]
#[case("https://evil-proton.me/", true)]
#[case("https://mail.proton.me/", true)]
#[case("https://evil.com/", false)]
#[case("https://proton.me.evil.com/", false)]
#[case("https://xproton.me./", false)]
#[case("https://mail.proton.me./", false)]
fn test_legacy_suffix_table(#[case] url: &str, #[case] allowed: bool) {
    let g = gate(SuffixMatch::Legacy);
    assert_eq!(g.is_allowed(&NavigationRequest::top_level(url)), allowed, "{}", url);
}

// ─── Frame context ───

#[test]
fn test_sub_frames_follow_the_same_rules() {
    let g = gate(SuffixMatch::LabelBoundary);
    assert!(g.is_allowed(&NavigationRequest::new("https://mail.proton.me/", FrameKind::SubFrame)));
    assert!(!g.is_allowed(&NavigationRequest::new("https://ads.example.com/", FrameKind::SubFrame)));
}

// ─── Statelessness ───

#[test]
fn test_repeated_evaluation_is_stable() {
    let g = gate(SuffixMatch::LabelBoundary);
    let requests = [
        NavigationRequest::top_level("https://lumo.proton.me/u/18/"),
        NavigationRequest::top_level("https://evil.com/"),
        NavigationRequest::top_level("https://mail.proton.me/"),
    ];
    let first: Vec<_> = requests.iter().map(|r| g.evaluate(r)).collect();
    let second: Vec<_> = requests.iter().rev().map(|r| g.evaluate(r)).collect();
    assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn test_custom_allow_list() {
    let config =
        GateConfig::new("https://chat.example.org/app/", "example.org", SuffixMatch::LabelBoundary)
            .unwrap();
    let g = NavigationGate::new(config);
    assert_eq!(
        g.evaluate(&NavigationRequest::top_level("https://chat.example.org/app/room/1")),
        NavigationDecision::AllowBase
    );
    assert_eq!(
        g.evaluate(&NavigationRequest::top_level("https://chat.example.org/other")),
        NavigationDecision::AllowTrustedHost
    );
    assert_eq!(
        g.evaluate(&NavigationRequest::top_level("https://lumo.proton.me/")),
        NavigationDecision::Block
    );
    assert_eq!(g.config().allowed_base(), "https://chat.example.org/app/");
}
