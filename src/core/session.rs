//! The account/session collaborator.
//!
//! Screens only see [`AccountService`]: sign in, sign up, sign out and a
//! [`SessionView`] of who is signed in. Credentials are validated locally with
//! [`validate_credentials`] before the service is called.
//!
//! [`LocalAccountService`] is the bundled implementation. It keeps accounts in
//! `accounts.json` and the signed-in session in `session.json`, both in the data
//! directory. Passwords are stored as md5 digests; this is a local stand-in and
//! not a credential store.

use crate::core::config::StoreConfig;
use crate::core::error::{Result, StorefrontError};
use crate::core::state::{read_json_file, write_json_file};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MIN_PASSWORD_LEN: usize = 6;

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl User {
    /// Full name when known, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub signed_in_at: DateTime<Utc>,
}

/// What a screen sees of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub user: Option<User>,
    pub is_admin: bool,
    pub loading: bool,
}

impl SessionView {
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(StorefrontError::NotSignedIn)
    }

    /// The protected-route rule: a signed-in user holding the admin role.
    pub fn require_admin(&self) -> Result<&User> {
        let user = self.require_user().map_err(|_| StorefrontError::AdminRequired)?;
        if !self.is_admin {
            log::debug!("Admin guard rejected {}", user.email);
            return Err(StorefrontError::AdminRequired);
        }
        Ok(user)
    }
}

pub trait AccountService {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session>;
    fn sign_up(&mut self, email: &str, password: &str, full_name: Option<&str>) -> Result<Session>;
    fn sign_out(&mut self) -> Result<()>;
    fn current_session(&self) -> SessionView;
}

pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(StorefrontError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(StorefrontError::InvalidEmail);
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");

    if local.is_empty() || !domain_ok {
        return Err(StorefrontError::InvalidEmail);
    }
    Ok(())
}

/// Email first, then password, matching the order the form reports them.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StorefrontError::PasswordTooShort);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    id: String,
    email: String,
    full_name: Option<String>,
    password_digest: String,
    created_at: DateTime<Utc>,
}

impl StoredAccount {
    fn user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn user_id_for(email: &str) -> String {
    let digest = format!("{:x}", md5::compute(normalize_email(email).as_bytes()));
    format!("user-{}", &digest[..12])
}

fn password_digest(email: &str, password: &str) -> String {
    let salted = format!("{}:{}", normalize_email(email), password);
    format!("{:x}", md5::compute(salted.as_bytes()))
}

pub struct LocalAccountService {
    accounts_path: PathBuf,
    session_path: PathBuf,
    accounts: Vec<StoredAccount>,
    session: Option<Session>,
    config: StoreConfig,
}

impl LocalAccountService {
    pub const ACCOUNTS_FILE: &'static str = "accounts.json";
    pub const SESSION_FILE: &'static str = "session.json";

    pub fn open(data_dir: impl Into<PathBuf>, config: &StoreConfig) -> Result<Self> {
        let data_dir = data_dir.into();
        let accounts_path = data_dir.join(Self::ACCOUNTS_FILE);
        let session_path = data_dir.join(Self::SESSION_FILE);

        let accounts: Vec<StoredAccount> = read_json_file(&accounts_path)?.unwrap_or_default();
        let session: Option<Session> = match read_json_file(&session_path) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Ignoring unreadable session file: {e}");
                None
            }
        };

        log::debug!(
            "Opened account service with {} account(s), signed in: {}",
            accounts.len(),
            session.is_some()
        );

        Ok(Self {
            accounts_path,
            session_path,
            accounts,
            session,
            config: config.clone(),
        })
    }

    fn start_session(&mut self, user: User) -> Result<Session> {
        let session = Session {
            user,
            signed_in_at: Utc::now(),
        };
        write_json_file(&self.session_path, &session)?;
        self.session = Some(session.clone());
        Ok(session)
    }
}

impl AccountService for LocalAccountService {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<Session> {
        validate_credentials(email, password)?;

        let wanted = normalize_email(email);
        let digest = password_digest(email, password);
        let user = self
            .accounts
            .iter()
            .find(|a| a.email == wanted && a.password_digest == digest)
            .map(StoredAccount::user)
            .ok_or_else(|| {
                log::debug!("Sign-in rejected for {wanted}");
                StorefrontError::sign_in_failed(INVALID_CREDENTIALS)
            })?;

        log::debug!("Signed in as {}", user.email);
        self.start_session(user)
    }

    fn sign_up(&mut self, email: &str, password: &str, full_name: Option<&str>) -> Result<Session> {
        validate_credentials(email, password)?;

        let email = normalize_email(email);
        if self.accounts.iter().any(|a| a.email == email) {
            return Err(StorefrontError::account_exists(email));
        }

        let account = StoredAccount {
            id: user_id_for(&email),
            password_digest: password_digest(&email, password),
            full_name: full_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            email,
            created_at: Utc::now(),
        };
        let user = account.user();

        let mut accounts = self.accounts.clone();
        accounts.push(account);
        write_json_file(&self.accounts_path, &accounts)?;
        self.accounts = accounts;

        log::debug!("Created account {}", user.email);
        self.start_session(user)
    }

    fn sign_out(&mut self) -> Result<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => log::debug!("Removed {}", self.session_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(StorefrontError::state_write_failed(&self.session_path, e)),
        }
        self.session = None;
        Ok(())
    }

    fn current_session(&self) -> SessionView {
        match &self.session {
            Some(session) => SessionView {
                is_admin: self.config.is_admin_email(&session.user.email),
                user: Some(session.user.clone()),
                loading: false,
            },
            None => SessionView::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(admins: &[&str]) -> StoreConfig {
        StoreConfig {
            admin_emails: admins.iter().map(|s| s.to_string()).collect(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("priya.v@email.com").is_ok());
        for bad in ["", "priya", "@email.com", "priya@", "priya@email", "pr iya@email.com", "a@b@c.com", "a@.com"] {
            assert!(
                matches!(validate_email(bad), Err(StorefrontError::InvalidEmail)),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_credentials_check_email_before_password() {
        assert!(matches!(
            validate_credentials("nope", "123"),
            Err(StorefrontError::InvalidEmail)
        ));
        assert!(matches!(
            validate_credentials("a@b.in", "12345"),
            Err(StorefrontError::PasswordTooShort)
        ));
        assert!(validate_credentials("a@b.in", "123456").is_ok());
    }

    #[test]
    fn test_sign_up_then_sign_in_across_instances() -> Result<()> {
        let dir = TempDir::new()?;
        let mut service = LocalAccountService::open(dir.path(), &config(&[]))?;
        let session = service.sign_up("Priya.V@Email.com", "secret1", Some("Priya Venkatesh"))?;
        assert_eq!(session.user.email, "priya.v@email.com");
        assert_eq!(session.user.display_name(), "Priya Venkatesh");
        assert!(session.user.id.starts_with("user-"));

        service.sign_out()?;
        assert!(service.current_session().user.is_none());

        let mut reopened = LocalAccountService::open(dir.path(), &config(&[]))?;
        let again = reopened.sign_in("priya.v@email.com", "secret1")?;
        assert_eq!(again.user, session.user);

        let view = LocalAccountService::open(dir.path(), &config(&[]))?.current_session();
        assert_eq!(view.user.map(|u| u.id), Some(session.user.id));
        assert!(!view.loading);
        Ok(())
    }

    #[test]
    fn test_wrong_password_reports_invalid_credentials() -> Result<()> {
        let dir = TempDir::new()?;
        let mut service = LocalAccountService::open(dir.path(), &config(&[]))?;
        service.sign_up("kavitha.r@email.com", "saree123", None)?;
        service.sign_out()?;

        let err = service.sign_in("kavitha.r@email.com", "wrongpass").unwrap_err();
        assert_eq!(err.to_string(), "Login failed: Invalid login credentials");
        let err = service.sign_in("nobody@email.com", "saree123").unwrap_err();
        assert_eq!(err.to_string(), "Login failed: Invalid login credentials");
        assert!(service.current_session().user.is_none());
        Ok(())
    }

    #[test]
    fn test_duplicate_sign_up_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let mut service = LocalAccountService::open(dir.path(), &config(&[]))?;
        service.sign_up("meena.s@email.com", "silk-123", None)?;
        assert!(matches!(
            service.sign_up("MEENA.S@email.com", "other-123", None),
            Err(StorefrontError::AccountExists { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_admin_role_comes_from_config() -> Result<()> {
        let dir = TempDir::new()?;
        let mut service = LocalAccountService::open(dir.path(), &config(&["Owner@Silks.in"]))?;
        service.sign_up("owner@silks.in", "admin123", None)?;
        let view = service.current_session();
        assert!(view.is_admin);
        assert!(view.require_admin().is_ok());

        service.sign_out()?;
        service.sign_up("guest@silks.in", "guest123", None)?;
        let view = service.current_session();
        assert!(!view.is_admin);
        assert!(matches!(
            view.require_admin(),
            Err(StorefrontError::AdminRequired)
        ));
        Ok(())
    }

    #[test]
    fn test_signed_out_view_guards() {
        let view = SessionView::default();
        assert!(matches!(view.require_user(), Err(StorefrontError::NotSignedIn)));
        assert!(matches!(view.require_admin(), Err(StorefrontError::AdminRequired)));
    }
}
