//! Access gate: selects between the public studio and the admin vault.
//!
//! The mode is a pure function of the current URL fragment and an in-memory
//! authenticated flag. Nothing here is persisted and nothing here is a security
//! boundary: the credential pair is a shared placeholder with no lockout or rate
//! limiting. Credential checks go through [`CredentialVerifier`] so a real scheme
//! can replace the static pair without touching the state machine.

/// Fragment (without the leading `#`) that selects the admin surface.
pub const ADMIN_FRAGMENT: &str = "admin";

/// Notice shown when a credential pair is rejected.
pub const ACCESS_DENIED_NOTICE: &str = "Invalid credentials. Access Denied.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Public,
    Locked,
    Authenticated,
}

/// Exact match after stripping one leading `#`; surrounding whitespace does not match.
pub fn is_admin_fragment(fragment: &str) -> bool {
    fragment.strip_prefix('#').unwrap_or(fragment) == ADMIN_FRAGMENT
}

/// Derive the view mode from the fragment and the authenticated flag.
pub fn access_mode(fragment: &str, authenticated: bool) -> AccessMode {
    match (is_admin_fragment(fragment), authenticated) {
        (false, _) => AccessMode::Public,
        (true, false) => AccessMode::Locked,
        (true, true) => AccessMode::Authenticated,
    }
}

/// Capability check for the admin surface.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single shared username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new("admin", "admin1234")
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Result of a credential submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// Gate stays locked; carries the notice to show.
    Denied(&'static str),
    /// Submitted while on the public surface; ignored.
    NotOnAdminSurface,
}

pub struct AccessGate {
    verifier: Box<dyn CredentialVerifier>,
    fragment: String,
    authenticated: bool,
}

impl AccessGate {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
            fragment: String::new(),
            authenticated: false,
        }
    }

    pub fn mode(&self) -> AccessMode {
        access_mode(&self.fragment, self.authenticated)
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Fragment change. Leaving the admin fragment drops authentication.
    pub fn navigate(&mut self, fragment: &str) -> AccessMode {
        self.fragment = fragment.to_string();
        if !is_admin_fragment(fragment) {
            self.authenticated = false;
        }
        self.mode()
    }

    pub fn submit_credentials(&mut self, username: &str, password: &str) -> LoginOutcome {
        match self.mode() {
            AccessMode::Public => LoginOutcome::NotOnAdminSurface,
            AccessMode::Authenticated => LoginOutcome::Granted,
            AccessMode::Locked => {
                if self.verifier.verify(username, password) {
                    self.authenticated = true;
                    tracing::info!("admin vault unlocked");
                    LoginOutcome::Granted
                } else {
                    tracing::warn!("admin vault access denied");
                    LoginOutcome::Denied(ACCESS_DENIED_NOTICE)
                }
            }
        }
    }

    /// Clears authentication and the fragment; the gate returns to the public studio.
    pub fn logout(&mut self) -> AccessMode {
        self.authenticated = false;
        self.fragment.clear();
        self.mode()
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(StaticCredentialVerifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_pure_in_fragment_and_flag() {
        assert_eq!(access_mode("", false), AccessMode::Public);
        assert_eq!(access_mode("", true), AccessMode::Public);
        assert_eq!(access_mode("#contact", true), AccessMode::Public);
        assert_eq!(access_mode("#admin", false), AccessMode::Locked);
        assert_eq!(access_mode("admin", true), AccessMode::Authenticated);
        assert_eq!(access_mode("#administrator", true), AccessMode::Public);
        assert_eq!(access_mode(" #admin ", true), AccessMode::Public);
        assert_eq!(access_mode("##admin", false), AccessMode::Public);
    }

    #[test]
    fn public_surface_ignores_credentials() {
        let mut gate = AccessGate::default();
        assert_eq!(gate.submit_credentials("admin", "admin1234"), LoginOutcome::NotOnAdminSurface);
        assert_eq!(gate.mode(), AccessMode::Public);
    }

    #[test]
    fn custom_verifier_is_consulted() {
        struct DenyAll;
        impl CredentialVerifier for DenyAll {
            fn verify(&self, _: &str, _: &str) -> bool {
                false
            }
        }
        let mut gate = AccessGate::new(DenyAll);
        gate.navigate("#admin");
        assert_eq!(
            gate.submit_credentials("admin", "admin1234"),
            LoginOutcome::Denied(ACCESS_DENIED_NOTICE)
        );
    }
}
