use super::*;

#[test]
fn login_requires_both_fields() {
    assert!(validate_login("", "pw").is_err());
    assert!(validate_login("   ", "pw").is_err());
    assert!(validate_login("a@b.com", "").is_err());
}

#[test]
fn login_trims_email_only() {
    assert_eq!(validate_login("  a@b.com ", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn sign_up_checks_password_length() {
    assert_eq!(validate_sign_up("a@b.com", "12345", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_sign_up("a@b.com", "123456", "123456").is_ok());
}

#[test]
fn sign_up_requires_matching_confirmation() {
    assert_eq!(validate_sign_up("a@b.com", "secret1", "secret2"), Err("Passwords do not match."));
}

#[test]
fn sign_up_rejects_email_without_at() {
    assert_eq!(validate_sign_up("learner", "secret1", "secret1"), Err("Enter a valid email address."));
}

#[test]
fn default_tab_is_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
}
