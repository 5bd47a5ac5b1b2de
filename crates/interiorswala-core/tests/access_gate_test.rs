//! Integration test: admin access gate transitions.

use interiorswala_core::{AccessGate, AccessMode, LoginOutcome, StaticCredentialVerifier, ACCESS_DENIED_NOTICE};

#[test]
fn admin_fragment_without_session_is_locked() {
    let mut gate = AccessGate::default();
    assert_eq!(gate.mode(), AccessMode::Public);
    assert_eq!(gate.navigate("#admin"), AccessMode::Locked);
}

#[test]
fn correct_pair_authenticates() {
    let mut gate = AccessGate::default();
    gate.navigate("#admin");
    assert_eq!(gate.submit_credentials("admin", "admin1234"), LoginOutcome::Granted);
    assert_eq!(gate.mode(), AccessMode::Authenticated);
}

#[test]
fn wrong_pair_stays_locked_with_notice() {
    let mut gate = AccessGate::default();
    gate.navigate("#admin");
    for (user, pass) in [("admin", "admin"), ("Admin", "admin1234"), ("", ""), ("admin", "admin1234 ")] {
        assert_eq!(
            gate.submit_credentials(user, pass),
            LoginOutcome::Denied(ACCESS_DENIED_NOTICE)
        );
        assert_eq!(gate.mode(), AccessMode::Locked);
    }
    // No lockout: the right pair still works after repeated failures.
    assert_eq!(gate.submit_credentials("admin", "admin1234"), LoginOutcome::Granted);
}

#[test]
fn clearing_fragment_drops_authentication() {
    let mut gate = AccessGate::default();
    gate.navigate("#admin");
    gate.submit_credentials("admin", "admin1234");
    assert_eq!(gate.navigate(""), AccessMode::Public);
    assert_eq!(gate.navigate("#admin"), AccessMode::Locked);

    gate.navigate("#portfolio");
    assert_eq!(gate.mode(), AccessMode::Public);
}

#[test]
fn logout_resets_fragment() {
    let mut gate = AccessGate::default();
    gate.navigate("#admin");
    gate.submit_credentials("admin", "admin1234");
    assert_eq!(gate.logout(), AccessMode::Public);
    assert_eq!(gate.fragment(), "");
    assert_eq!(gate.navigate("#admin"), AccessMode::Locked);
}

#[test]
fn configured_pair_replaces_default() {
    let mut gate = AccessGate::new(StaticCredentialVerifier::new("curator", "s3cret-vault"));
    gate.navigate("#admin");
    assert_eq!(
        gate.submit_credentials("admin", "admin1234"),
        LoginOutcome::Denied(ACCESS_DENIED_NOTICE)
    );
    assert_eq!(gate.submit_credentials("curator", "s3cret-vault"), LoginOutcome::Granted);
}
