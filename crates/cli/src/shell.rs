//! Screen and form state for the client.
//!
//! The shell owns no terminal or window; it holds what a front end needs
//! to render (current screen, form contents, busy flag, banner, cached
//! ideas) and performs the server calls. Time is passed in explicitly so
//! banner expiry and the delayed return to the login screen are testable.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::api::dto::{Idea, NewIdea, User};
use crate::api::{ClientError, IdeasApi};
use crate::identity_store::IdentityStore;

/// Banner lifetime for client-side validation failures.
pub const VALIDATION_BANNER_TTL: Duration = Duration::from_secs(3);
/// Banner lifetime after an idea submission, successful or not.
pub const SUBMIT_BANNER_TTL: Duration = Duration::from_secs(5);
/// Delay between a successful registration and the switch back to login.
pub const REGISTERED_SWITCH_DELAY: Duration = Duration::from_secs(2);

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match!";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTER_SUCCESS: &str = "Registration successful! You can now login.";
pub const SUBMIT_SUCCESS: &str = "Idea submitted successfully!";
pub const SUBMIT_NETWORK_ERROR: &str = "Error submitting idea. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    expires_at: Option<Instant>,
}

impl Banner {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub phone_number: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct IdeaForm {
    pub text: String,
    pub project: String,
    pub module: String,
    pub section: String,
}

impl IdeaForm {
    fn is_complete(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.project.is_empty()
            && !self.module.is_empty()
            && !self.section.is_empty()
    }
}

pub struct Shell {
    api: Arc<dyn IdeasApi>,
    identity: Box<dyn IdentityStore>,
    screen: Screen,
    user: Option<User>,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub idea_form: IdeaForm,
    busy: bool,
    banner: Option<Banner>,
    my_ideas: Vec<Idea>,
    switch_to_login_at: Option<Instant>,
}

impl Shell {
    /// Build a shell, restoring a remembered identity if there is one.
    pub fn new(api: Arc<dyn IdeasApi>, identity: Box<dyn IdentityStore>) -> Result<Self> {
        let user = identity.load()?;
        let screen = if user.is_some() {
            Screen::Dashboard
        } else {
            Screen::Login
        };

        Ok(Self {
            api,
            identity,
            screen,
            user,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            idea_form: IdeaForm::default(),
            busy: false,
            banner: None,
            my_ideas: Vec::new(),
            switch_to_login_at: None,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn my_ideas(&self) -> &[Idea] {
        &self.my_ideas
    }

    /// The banner to show at `now`, if any.
    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_live(now))
    }

    /// Drop expired banners and apply a pending switch back to login.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| !b.is_live(now)) {
            self.banner = None;
        }
        if self.switch_to_login_at.is_some_and(|at| now >= at) {
            self.switch_to_login_at = None;
            self.register_form = RegisterForm::default();
            self.banner = None;
            self.screen = Screen::Login;
        }
    }

    pub fn show_register(&mut self) {
        self.screen = Screen::Register;
        self.banner = None;
    }

    pub fn show_login(&mut self) {
        self.screen = Screen::Login;
        self.banner = None;
        self.switch_to_login_at = None;
    }

    fn set_banner(
        &mut self,
        kind: BannerKind,
        text: impl Into<String>,
        ttl: Option<(Instant, Duration)>,
    ) {
        self.banner = Some(Banner {
            kind,
            text: text.into(),
            expires_at: ttl.map(|(now, ttl)| now + ttl),
        });
    }

    /// Submit the login form. Returns whether the user is now signed in.
    pub async fn submit_login(&mut self) -> Result<bool> {
        self.busy = true;
        self.banner = None;
        let result = self
            .api
            .login(&self.login_form.phone_number, &self.login_form.password)
            .await;
        self.busy = false;

        let user = match result {
            Ok(user) => user,
            Err(e) => {
                self.set_banner(BannerKind::Error, e.to_string(), None);
                return Ok(false);
            }
        };

        // A previously remembered user must not outlive a login that opted out.
        if self.login_form.remember_me {
            self.identity.save(&user)?;
        } else {
            self.identity.clear()?;
        }
        self.user = Some(user);
        self.login_form = LoginForm::default();
        self.screen = Screen::Dashboard;
        self.set_banner(BannerKind::Success, LOGIN_SUCCESS, None);
        let _ = self.refresh_my_ideas().await;
        Ok(true)
    }

    /// Submit the registration form. Returns whether the account was created.
    pub async fn submit_register(&mut self, now: Instant) -> bool {
        self.banner = None;
        if self.register_form.password != self.register_form.confirm_password {
            self.set_banner(
                BannerKind::Error,
                PASSWORDS_DO_NOT_MATCH,
                Some((now, VALIDATION_BANNER_TTL)),
            );
            return false;
        }

        self.busy = true;
        let form = &self.register_form;
        let result = self
            .api
            .register(&form.full_name, &form.phone_number, &form.password)
            .await;
        self.busy = false;

        match result {
            Ok(_) => {
                self.set_banner(BannerKind::Success, REGISTER_SUCCESS, None);
                self.switch_to_login_at = Some(now + REGISTERED_SWITCH_DELAY);
                true
            }
            Err(e) => {
                self.set_banner(BannerKind::Error, e.to_string(), None);
                false
            }
        }
    }

    /// Forget the signed-in user, including any remembered identity.
    pub fn logout(&mut self) -> Result<()> {
        self.identity.clear()?;
        self.user = None;
        self.screen = Screen::Login;
        self.banner = None;
        self.login_form = LoginForm::default();
        self.register_form = RegisterForm::default();
        self.idea_form = IdeaForm::default();
        self.my_ideas.clear();
        Ok(())
    }

    /// Submit the idea form as the signed-in user. Returns whether the idea
    /// was stored.
    pub async fn submit_idea(&mut self, now: Instant) -> Result<bool> {
        let Some(user) = self.user.clone() else {
            bail!("Not logged in. Run `ideas login` first.");
        };

        if !self.idea_form.is_complete() {
            self.set_banner(
                BannerKind::Error,
                FILL_ALL_FIELDS,
                Some((now, VALIDATION_BANNER_TTL)),
            );
            return Ok(false);
        }

        let idea = NewIdea {
            text: self.idea_form.text.clone(),
            project: self.idea_form.project.clone(),
            module: self.idea_form.module.clone(),
            section: self.idea_form.section.clone(),
            submitted_by: user.full_name,
            user_id: user.id,
        };

        self.busy = true;
        let result = self.api.submit_idea(&idea).await;
        self.busy = false;

        let ttl = Some((now, SUBMIT_BANNER_TTL));
        match result {
            Ok(_) => {
                self.idea_form = IdeaForm::default();
                self.set_banner(BannerKind::Success, SUBMIT_SUCCESS, ttl);
                let _ = self.refresh_my_ideas().await;
                Ok(true)
            }
            Err(e) if e.is_network() => {
                self.set_banner(BannerKind::Error, SUBMIT_NETWORK_ERROR, ttl);
                Ok(false)
            }
            Err(e) => {
                self.set_banner(BannerKind::Error, e.to_string(), ttl);
                Ok(false)
            }
        }
    }

    /// Reload the signed-in user's ideas. On failure the cached list is kept.
    pub async fn refresh_my_ideas(&mut self) -> Result<&[Idea], ClientError> {
        if let Some(user) = &self.user {
            self.my_ideas = self.api.list_user_ideas(user.id).await?;
        }
        Ok(&self.my_ideas)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use ideas_core::idea_status::IdeaStatus;
    use reqwest::StatusCode;

    use super::*;
    use crate::api::dto::{AccountSummary, IdeaWithOwner};
    use crate::identity_store::MemoryIdentityStore;

    /// In-process stand-in for the server.
    #[derive(Default)]
    struct FakeApi {
        accounts: Mutex<Vec<(User, String)>>,
        ideas: Mutex<Vec<Idea>>,
    }

    fn server_error(message: &str) -> ClientError {
        ClientError::Server {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    #[async_trait]
    impl IdeasApi for FakeApi {
        async fn register(
            &self,
            full_name: &str,
            phone_number: &str,
            password: &str,
        ) -> Result<User, ClientError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.iter().any(|(u, _)| u.phone_number == phone_number) {
                return Err(server_error("User with this phone number already exists"));
            }
            let user = User {
                id: accounts.len() as i64 + 1,
                full_name: full_name.to_string(),
                phone_number: phone_number.to_string(),
            };
            accounts.push((user.clone(), password.to_string()));
            Ok(user)
        }

        async fn login(&self, phone_number: &str, password: &str) -> Result<User, ClientError> {
            self.accounts
                .lock()
                .unwrap()
                .iter()
                .find(|(u, pw)| u.phone_number == phone_number && pw == password)
                .map(|(u, _)| u.clone())
                .ok_or_else(|| server_error("Invalid phone number or password"))
        }

        async fn list_users(&self) -> Result<Vec<AccountSummary>, ClientError> {
            unimplemented!()
        }

        async fn submit_idea(&self, idea: &NewIdea) -> Result<Idea, ClientError> {
            let mut ideas = self.ideas.lock().unwrap();
            let now = Utc::now();
            let stored = Idea {
                id: ideas.len() as i64 + 1,
                text: idea.text.clone(),
                project: idea.project.clone(),
                module: idea.module.clone(),
                section: idea.section.clone(),
                submitted_by: idea.submitted_by.clone(),
                user_id: idea.user_id,
                status: IdeaStatus::Pending,
                created_at: now,
                updated_at: now,
            };
            ideas.insert(0, stored.clone());
            Ok(stored)
        }

        async fn list_ideas(&self) -> Result<Vec<IdeaWithOwner>, ClientError> {
            unimplemented!()
        }

        async fn list_user_ideas(&self, user_id: i64) -> Result<Vec<Idea>, ClientError> {
            Ok(self
                .ideas
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn update_status(&self, _: i64, _: &str) -> Result<Idea, ClientError> {
            unimplemented!()
        }
    }

    fn ann() -> User {
        User {
            id: 1,
            full_name: "Ann".into(),
            phone_number: "555-0001".into(),
        }
    }

    /// Lets a test inspect the identity store after handing it to the shell.
    struct Shared(Arc<MemoryIdentityStore>);

    impl IdentityStore for Shared {
        fn load(&self) -> Result<Option<User>> {
            self.0.load()
        }
        fn save(&self, user: &User) -> Result<()> {
            self.0.save(user)
        }
        fn clear(&self) -> Result<()> {
            self.0.clear()
        }
    }

    fn shell_with(api: FakeApi, identity: MemoryIdentityStore) -> Shell {
        Shell::new(Arc::new(api), Box::new(identity)).unwrap()
    }

    async fn signed_in_shell() -> Shell {
        let api = FakeApi::default();
        api.register("Ann", "555-0001", "secret1").await.unwrap();
        let mut shell = shell_with(api, MemoryIdentityStore::default());
        shell.login_form.phone_number = "555-0001".into();
        shell.login_form.password = "secret1".into();
        assert!(shell.submit_login().await.unwrap());
        shell
    }

    fn fill_idea(shell: &mut Shell) {
        shell.idea_form = IdeaForm {
            text: "add dark mode".into(),
            project: "dashboard".into(),
            module: "settings".into(),
            section: "ui-ux".into(),
        };
    }

    #[test]
    fn starts_on_login_without_identity() {
        let shell = shell_with(FakeApi::default(), MemoryIdentityStore::default());
        assert_eq!(shell.screen(), Screen::Login);
        assert!(shell.user().is_none());
    }

    #[test]
    fn restores_remembered_identity() {
        let shell = shell_with(FakeApi::default(), MemoryIdentityStore::with_user(ann()));
        assert_eq!(shell.screen(), Screen::Dashboard);
        assert_eq!(shell.user(), Some(&ann()));
    }

    #[tokio::test]
    async fn login_without_remember_does_not_persist() {
        let api = Arc::new(FakeApi::default());
        api.register("Ann", "555-0001", "secret1").await.unwrap();
        let identity = Arc::new(MemoryIdentityStore::default());
        let mut shell = Shell::new(api.clone(), Box::new(Shared(identity.clone()))).unwrap();
        shell.login_form.phone_number = "555-0001".into();
        shell.login_form.password = "secret1".into();
        assert!(shell.submit_login().await.unwrap());
        assert_eq!(shell.screen(), Screen::Dashboard);
        assert_eq!(identity.load().unwrap(), None);

        shell.logout().unwrap();
        shell.login_form.phone_number = "555-0001".into();
        shell.login_form.password = "secret1".into();
        shell.login_form.remember_me = true;
        assert!(shell.submit_login().await.unwrap());
        assert_eq!(identity.load().unwrap().map(|u| u.id), Some(1));
        // The form is reset after a successful login.
        assert!(!shell.login_form.remember_me);

        shell.logout().unwrap();
        assert_eq!(identity.load().unwrap(), None);
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn login_without_remember_forgets_previous_identity() {
        let api = Arc::new(FakeApi::default());
        api.register("Ann", "555-0001", "secret1").await.unwrap();
        let identity = Arc::new(MemoryIdentityStore::default());
        let mut shell = Shell::new(api.clone(), Box::new(Shared(identity.clone()))).unwrap();

        // Another session on this machine remembered a different user.
        let bob = User {
            id: 99,
            full_name: "Bob".into(),
            phone_number: "555-0099".into(),
        };
        identity.save(&bob).unwrap();

        shell.login_form.phone_number = "555-0001".into();
        shell.login_form.password = "secret1".into();
        assert!(shell.submit_login().await.unwrap());
        assert_eq!(shell.user().map(|u| u.id), Some(1));
        assert_eq!(identity.load().unwrap(), None);

        // The next launch starts at the login screen instead of as Bob.
        let relaunched = Shell::new(api, Box::new(Shared(identity.clone()))).unwrap();
        assert_eq!(relaunched.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn failed_login_shows_server_message() {
        let mut shell = shell_with(FakeApi::default(), MemoryIdentityStore::default());
        shell.login_form.phone_number = "555-0009".into();
        shell.login_form.password = "nope".into();

        assert!(!shell.submit_login().await.unwrap());
        let now = Instant::now();
        let banner = shell.banner(now).unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Invalid phone number or password");
        assert_eq!(shell.screen(), Screen::Login);
        assert!(!shell.is_busy());
    }

    #[tokio::test]
    async fn mismatched_confirmation_never_reaches_server() {
        let mut shell = shell_with(FakeApi::default(), MemoryIdentityStore::default());
        shell.show_register();
        shell.register_form = RegisterForm {
            full_name: "Ann".into(),
            phone_number: "555-0001".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };

        let now = Instant::now();
        assert!(!shell.submit_register(now).await);
        assert_eq!(shell.banner(now).unwrap().text, PASSWORDS_DO_NOT_MATCH);
        assert!(shell.banner(now + VALIDATION_BANNER_TTL).is_none());

        // The account was not created.
        shell.login_form.phone_number = "555-0001".into();
        shell.login_form.password = "secret1".into();
        assert!(!shell.submit_login().await.unwrap());
    }

    #[tokio::test]
    async fn registration_returns_to_login_after_delay() {
        let mut shell = shell_with(FakeApi::default(), MemoryIdentityStore::default());
        shell.show_register();
        shell.register_form = RegisterForm {
            full_name: "Ann".into(),
            phone_number: "555-0001".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };

        let now = Instant::now();
        assert!(shell.submit_register(now).await);
        assert_eq!(shell.banner(now).unwrap().text, REGISTER_SUCCESS);

        shell.tick(now + Duration::from_secs(1));
        assert_eq!(shell.screen(), Screen::Register);

        shell.tick(now + REGISTERED_SWITCH_DELAY);
        assert_eq!(shell.screen(), Screen::Login);
        assert!(shell.register_form.full_name.is_empty());
        assert!(shell.banner(now + REGISTERED_SWITCH_DELAY).is_none());
    }

    #[tokio::test]
    async fn incomplete_idea_form_is_rejected_locally() {
        let mut shell = signed_in_shell().await;
        fill_idea(&mut shell);
        shell.idea_form.text = "   ".into();

        let now = Instant::now();
        assert!(!shell.submit_idea(now).await.unwrap());
        assert_eq!(shell.banner(now).unwrap().text, FILL_ALL_FIELDS);
        assert!(shell.my_ideas().is_empty());

        shell.tick(now + VALIDATION_BANNER_TTL);
        assert!(shell.banner(now).is_none());
    }

    #[tokio::test]
    async fn submitted_idea_appears_in_my_ideas() {
        let mut shell = signed_in_shell().await;
        fill_idea(&mut shell);

        let now = Instant::now();
        assert!(shell.submit_idea(now).await.unwrap());

        let banner = shell.banner(now).unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert!(shell.banner(now + Duration::from_secs(4)).is_some());
        assert!(shell.banner(now + SUBMIT_BANNER_TTL).is_none());

        assert!(shell.idea_form.text.is_empty());
        assert_eq!(shell.my_ideas().len(), 1);
        assert_eq!(shell.my_ideas()[0].submitted_by, "Ann");
        assert_eq!(shell.my_ideas()[0].status, IdeaStatus::Pending);
    }

    #[tokio::test]
    async fn submitting_requires_a_signed_in_user() {
        let mut shell = shell_with(FakeApi::default(), MemoryIdentityStore::default());
        fill_idea(&mut shell);
        assert!(shell.submit_idea(Instant::now()).await.is_err());
    }
}
