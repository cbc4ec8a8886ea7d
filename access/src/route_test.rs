use super::*;

// =============================================================================
// normalize
// =============================================================================

#[test]
fn normalize_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize("/about/"), "/about");
    assert_eq!(normalize("/about?ref=nav"), "/about");
    assert_eq!(normalize("/contact#form"), "/contact");
    assert_eq!(normalize("/dashboard//"), "/dashboard");
}

#[test]
fn normalize_maps_empty_and_slashes_to_root() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize("//"), "/");
    assert_eq!(normalize("/?next=/dashboard"), "/");
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_public_allowlist() {
    for path in PUBLIC_ROUTES {
        assert_eq!(classify(path), RouteCategory::Public, "{path}");
    }
}

#[test]
fn classify_auth_route_and_children() {
    assert_eq!(classify("/auth"), RouteCategory::Auth);
    assert_eq!(classify("/auth/"), RouteCategory::Auth);
    assert_eq!(classify("/auth/callback"), RouteCategory::Auth);
    assert_eq!(classify("/auth?tab=signup"), RouteCategory::Auth);
}

#[test]
fn classify_auth_prefix_is_segment_based() {
    assert_eq!(classify("/authors"), RouteCategory::Protected);
    assert_eq!(classify("/authentication"), RouteCategory::Protected);
}

#[test]
fn classify_defaults_to_protected() {
    for path in ["/dashboard", "/reading", "/settings", "/about/team", "/contactus", "/unknown/deep/path"] {
        assert_eq!(classify(path), RouteCategory::Protected, "{path}");
    }
}

#[test]
fn classify_public_paths_with_trailing_slash() {
    assert_eq!(classify("/about/"), RouteCategory::Public);
    assert_eq!(classify("/contact?x=1"), RouteCategory::Public);
}

// =============================================================================
// is_guarded
// =============================================================================

#[test]
fn guard_skips_exclusion_set() {
    for path in ["/api/auth/session", "/api", "/pkg/bk-english.wasm", "/assets/logo.svg", "/favicon.ico", "/healthz"] {
        assert!(!is_guarded(path), "{path} should bypass the guard");
    }
}

#[test]
fn guard_covers_pages() {
    for path in ["/", "/about", "/auth", "/dashboard", "/apiary", "/pkgs"] {
        assert!(is_guarded(path), "{path} should be guarded");
    }
}
