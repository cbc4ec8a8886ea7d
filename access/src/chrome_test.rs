use super::*;
use crate::SessionUser;

fn session(email: Option<&str>) -> Session {
    Session { user: SessionUser { id: "u1".to_owned(), email: email.map(str::to_owned) }, expires_at: None }
}

#[test]
fn anonymous_has_no_sidebar_and_no_identity() {
    let chrome = LayoutChrome::derive(None, "/about");
    assert!(!chrome.sidebar);
    assert!(chrome.identity.is_none());
    assert!(chrome.footer);
}

#[test]
fn authenticated_shows_sidebar_and_identity() {
    let s = session(Some("learner@example.com"));
    let chrome = LayoutChrome::derive(Some(&s), "/dashboard");
    assert!(chrome.sidebar);
    assert_eq!(chrome.identity, Some(HeaderIdentity { label: "learner@example.com".to_owned() }));
}

#[test]
fn authenticated_on_auth_route_hides_sidebar_and_footer() {
    let s = session(Some("learner@example.com"));
    let chrome = LayoutChrome::derive(Some(&s), "/auth");
    assert!(!chrome.sidebar);
    assert!(!chrome.footer);
    assert!(chrome.identity.is_some());
}

#[test]
fn identity_falls_back_when_email_missing() {
    let s = session(None);
    let chrome = LayoutChrome::derive(Some(&s), "/");
    assert_eq!(chrome.identity.map(|i| i.label), Some(FALLBACK_IDENTITY_LABEL.to_owned()));
}

#[test]
fn sidebar_rule_uses_the_shared_classifier() {
    let s = session(Some("a@b.com"));
    assert!(!LayoutChrome::derive(Some(&s), "/auth/callback").sidebar);
    assert!(LayoutChrome::derive(Some(&s), "/authors").sidebar);
}
