use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_admin_requires_exact_literal() {
    assert_eq!(Role::from_slot(Some("admin")), Role::Admin);
    assert_eq!(Role::from_slot(Some("Admin")), Role::User);
    assert_eq!(Role::from_slot(Some(" admin")), Role::User);
}

#[test]
fn role_missing_or_empty_is_guest() {
    assert_eq!(Role::from_slot(None), Role::Guest);
    assert_eq!(Role::from_slot(Some("")), Role::Guest);
}

#[test]
fn role_other_strings_are_user() {
    assert_eq!(Role::from_slot(Some("vendedor")), Role::User);
}

// =============================================================
// Credentials snapshot
// =============================================================

#[test]
fn read_from_empty_store_is_unauthenticated() {
    let creds = Credentials::read(&MemoryCredentials::new());
    assert!(!creds.has_token());
    assert_eq!(creds.role, Role::Guest);
}

#[test]
fn read_treats_empty_token_as_absent() {
    let creds = Credentials::read(&MemoryCredentials::new().with_token(""));
    assert!(!creds.has_token());
}

#[test]
fn read_picks_up_token_and_role() {
    let store = MemoryCredentials::new().with_token("abc123").with_role("admin");
    let creds = Credentials::read(&store);
    assert_eq!(creds.token.as_deref(), Some("abc123"));
    assert!(creds.is_admin());
}

#[test]
fn token_and_role_are_independent() {
    let creds = Credentials::read(&MemoryCredentials::new().with_role("admin"));
    assert!(!creds.has_token());
    assert!(creds.is_admin());
}

#[test]
fn remove_clears_a_slot() {
    let mut store = MemoryCredentials::new().with_token("abc123");
    store.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn arc_store_delegates() {
    let store: Arc<dyn CredentialStore + Send + Sync> = Arc::new(MemoryCredentials::new().with_token("t"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_outside_browser_is_empty() {
    assert_eq!(LocalStorageCredentials.get(TOKEN_KEY), None);
}
