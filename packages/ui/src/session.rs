//! # Session container — the single authority for "who is logged in"
//!
//! The session moves through three states: initializing (a persisted token,
//! if any, is still being validated), authenticated, and unauthenticated.
//! The route guard and every page read it through [`use_session`]; only the
//! five operations here ever change it.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`initialize`] | Validate a persisted token against `/auth/me`; discard it on any failure. Runs once at startup. |
//! | [`login`] | Exchange credentials for a token, fetch the user, persist both. Nothing is persisted on failure. |
//! | [`register`] | Create the account, then auto-login with the same credentials. |
//! | [`logout`] | Drop the token and user from memory and storage. Idempotent. |
//! | [`refresh_user`] | Re-fetch the current user (e.g. after a role change); a rejected token downgrades to a full logout. |
//!
//! The core functions are generic over [`AuthApi`] (the three auth endpoints
//! plus the transport's token slot) and [`store::KeyValueStore`] (where the
//! token and cached user persist), so the whole contract is unit-tested with
//! a stub backend and an in-memory store. [`SessionProvider`] wires them to
//! the real [`api::ApiClient`] and, on the web platform, `localStorage`.

use dioxus::prelude::*;

use api::{ApiClient, ApiError, Token, User};
use store::{keys, KeyValueStore};

/// Session state shared through context.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until [`initialize`] has finished validating any persisted
    /// token. Distinct from unauthenticated: the guard must not redirect
    /// (or render protected content) while this is set.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// The slice of the backend the session container depends on.
pub trait AuthApi {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Token, ApiError>>;
    fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;
    fn current_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;
    /// Install or clear the bearer token on the transport.
    fn set_token(&self, token: Option<&str>);
}

impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        ApiClient::login(self, email, password).await
    }

    async fn register(&self, email: &str, password: &str, full_name: &str) -> Result<User, ApiError> {
        ApiClient::register(self, email, password, full_name).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        ApiClient::current_user(self).await
    }

    fn set_token(&self, token: Option<&str>) {
        ApiClient::set_token(self, token)
    }
}

/// Validate a persisted token, if any, and return the signed-in user.
/// On any failure the persisted token and cached user are discarded.
pub async fn initialize<A: AuthApi, S: KeyValueStore>(api: &A, storage: &S) -> Option<User> {
    let token = storage.get(keys::ACCESS_TOKEN).await?;
    api.set_token(Some(&token));
    match api.current_user().await {
        Ok(user) => {
            cache_user(storage, &user).await;
            Some(user)
        }
        Err(err) => {
            tracing::warn!("persisted token rejected: {err}");
            clear(api, storage).await;
            None
        }
    }
}

/// Exchange credentials for a bearer token and fetch the current user.
/// The token is persisted only once the user fetch succeeds, so a failed
/// login never leaves partial session state behind.
pub async fn login<A: AuthApi, S: KeyValueStore>(
    api: &A,
    storage: &S,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let token = api.login(email, password).await?;
    api.set_token(Some(&token.access_token));
    match api.current_user().await {
        Ok(user) => {
            storage.set(keys::ACCESS_TOKEN, &token.access_token).await;
            cache_user(storage, &user).await;
            Ok(user)
        }
        Err(err) => {
            api.set_token(None);
            Err(err)
        }
    }
}

/// Create an account, then log in with the same credentials. A rejected
/// registration (e.g. duplicate email) establishes no session.
pub async fn register<A: AuthApi, S: KeyValueStore>(
    api: &A,
    storage: &S,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<User, ApiError> {
    api.register(email, password, full_name).await?;
    login(api, storage, email, password).await
}

/// Drop the session from memory and storage. Safe to call repeatedly.
pub async fn logout<A: AuthApi, S: KeyValueStore>(api: &A, storage: &S) {
    clear(api, storage).await;
}

/// Re-fetch the current user to pick up server-side changes (e.g. a role
/// promotion). A failure means the token is no longer valid, so the end
/// state is identical to an explicit logout.
pub async fn refresh_user<A: AuthApi, S: KeyValueStore>(api: &A, storage: &S) -> Option<User> {
    match api.current_user().await {
        Ok(user) => {
            cache_user(storage, &user).await;
            Some(user)
        }
        Err(err) => {
            tracing::warn!("refresh rejected, logging out: {err}");
            clear(api, storage).await;
            None
        }
    }
}

async fn clear<A: AuthApi, S: KeyValueStore>(api: &A, storage: &S) {
    api.set_token(None);
    storage.remove(keys::ACCESS_TOKEN).await;
    storage.remove(keys::USER).await;
}

async fn cache_user<S: KeyValueStore>(storage: &S, user: &User) {
    if let Ok(json) = serde_json::to_string(user) {
        storage.set(keys::USER, &json).await;
    }
}

/// The platform's persistent store for the two session keys. One instance
/// lives on the [`Session`] handle so every operation reads and writes the
/// same store, browser or not.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
type SessionStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type SessionStore = store::MemoryStore;

/// Handle to the session shared through context. Clones share the same
/// underlying signal, transport, and store.
#[derive(Clone)]
pub struct Session {
    state: Signal<SessionState>,
    client: ApiClient,
    store: SessionStore,
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// The shared transport, for callers that need it outside of context.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = login(&self.client, &self.store, email, password).await?;
        self.set_user(Some(user));
        Ok(())
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), ApiError> {
        let user = register(&self.client, &self.store, email, password, full_name).await?;
        self.set_user(Some(user));
        Ok(())
    }

    pub async fn logout(&self) {
        logout(&self.client, &self.store).await;
        self.set_user(None);
    }

    pub async fn refresh_user(&self) {
        let user = refresh_user(&self.client, &self.store).await;
        self.set_user(user);
    }

    fn set_user(&self, user: Option<User>) {
        let mut state = self.state;
        state.set(SessionState {
            user,
            loading: false,
        });
    }
}

/// Get the current session.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session state. Wrap the router with
/// this; it also provides the shared [`ApiClient`] context.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_context_provider(ApiClient::new);
    let state = use_signal(SessionState::default);
    let session = use_context_provider(|| Session {
        state,
        client,
        store: SessionStore::default(),
    });

    // Validate any persisted token once at startup.
    let _init = use_resource(move || {
        let session = session.clone();
        async move {
            let user = initialize(&session.client, &session.store).await;
            session.set_user(user);
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use store::MemoryStore;

    #[derive(Clone, Default)]
    struct StubAuth {
        inner: Arc<Mutex<StubState>>,
    }

    #[derive(Default)]
    struct StubState {
        token: Option<String>,
        login: Option<Result<Token, ApiError>>,
        register: Option<Result<User, ApiError>>,
        // Consumed front to back; the last response repeats.
        me: Vec<Result<User, ApiError>>,
    }

    impl StubAuth {
        fn with_login(self, response: Result<Token, ApiError>) -> Self {
            self.inner.lock().unwrap().login = Some(response);
            self
        }

        fn with_register(self, response: Result<User, ApiError>) -> Self {
            self.inner.lock().unwrap().register = Some(response);
            self
        }

        fn with_me(self, responses: Vec<Result<User, ApiError>>) -> Self {
            self.inner.lock().unwrap().me = responses;
            self
        }

        fn token(&self) -> Option<String> {
            self.inner.lock().unwrap().token.clone()
        }
    }

    impl AuthApi for StubAuth {
        async fn login(&self, _email: &str, _password: &str) -> Result<Token, ApiError> {
            self.inner.lock().unwrap().login.clone().expect("login response")
        }

        async fn register(
            &self,
            _email: &str,
            _password: &str,
            _full_name: &str,
        ) -> Result<User, ApiError> {
            self.inner
                .lock()
                .unwrap()
                .register
                .clone()
                .expect("register response")
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            let mut state = self.inner.lock().unwrap();
            if state.me.len() > 1 {
                state.me.remove(0)
            } else {
                state.me.first().cloned().expect("me response")
            }
        }

        fn set_token(&self, token: Option<&str>) {
            self.inner.lock().unwrap().token = token.map(str::to_string);
        }
    }

    fn sample_user(is_admin: bool) -> User {
        User {
            id: 7,
            email: "fan@example.com".to_string(),
            full_name: "Sample Fan".to_string(),
            is_admin,
            created_at: "2024-08-01T00:00:00".to_string(),
        }
    }

    fn sample_token() -> Token {
        Token {
            access_token: "tok-abc".to_string(),
            token_type: "bearer".to_string(),
        }
    }

    fn unauthorized() -> ApiError {
        ApiError::Status {
            status: 401,
            detail: Some("Could not validate credentials".to_string()),
        }
    }

    async fn assert_nothing_persisted(storage: &MemoryStore) {
        assert!(storage.get(keys::ACCESS_TOKEN).await.is_none());
        assert!(storage.get(keys::USER).await.is_none());
    }

    #[tokio::test]
    async fn test_login_refresh_logout_leaves_nothing_persisted() {
        let auth = StubAuth::default()
            .with_login(Ok(sample_token()))
            .with_me(vec![Ok(sample_user(false))]);
        let storage = MemoryStore::new();

        let user = login(&auth, &storage, "fan@example.com", "pw").await.unwrap();
        assert_eq!(user.email, "fan@example.com");
        assert_eq!(storage.get(keys::ACCESS_TOKEN).await.as_deref(), Some("tok-abc"));
        assert!(storage.get(keys::USER).await.is_some());

        assert!(refresh_user(&auth, &storage).await.is_some());

        logout(&auth, &storage).await;
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_failed_refresh_is_identical_to_logout() {
        let auth = StubAuth::default()
            .with_login(Ok(sample_token()))
            .with_me(vec![Ok(sample_user(false)), Err(unauthorized())]);
        let storage = MemoryStore::new();

        login(&auth, &storage, "fan@example.com", "pw").await.unwrap();

        // Token expired server-side between the two calls.
        assert!(refresh_user(&auth, &storage).await.is_none());
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_rejected_login_persists_no_token() {
        let auth = StubAuth::default().with_login(Err(ApiError::Status {
            status: 401,
            detail: Some("Incorrect email or password".to_string()),
        }));
        let storage = MemoryStore::new();

        let err = login(&auth, &storage, "fan@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.detail_or("fallback"), "Incorrect email or password");
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_login_with_failing_user_fetch_rolls_back() {
        let auth = StubAuth::default()
            .with_login(Ok(sample_token()))
            .with_me(vec![Err(unauthorized())]);
        let storage = MemoryStore::new();

        assert!(login(&auth, &storage, "fan@example.com", "pw").await.is_err());
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_duplicate_email_register_surfaces_detail_verbatim() {
        let auth = StubAuth::default().with_register(Err(ApiError::Status {
            status: 400,
            detail: Some("Email already registered".to_string()),
        }));
        let storage = MemoryStore::new();

        let err = register(&auth, &storage, "fan@example.com", "pw123456", "Sample Fan")
            .await
            .unwrap_err();
        assert_eq!(err.detail_or("fallback"), "Email already registered");
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_register_auto_logs_in() {
        let auth = StubAuth::default()
            .with_register(Ok(sample_user(false)))
            .with_login(Ok(sample_token()))
            .with_me(vec![Ok(sample_user(false))]);
        let storage = MemoryStore::new();

        let user = register(&auth, &storage, "fan@example.com", "pw123456", "Sample Fan")
            .await
            .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(auth.token().as_deref(), Some("tok-abc"));
        assert_eq!(storage.get(keys::ACCESS_TOKEN).await.as_deref(), Some("tok-abc"));
    }

    #[tokio::test]
    async fn test_initialize_without_token_starts_unauthenticated() {
        let auth = StubAuth::default();
        let storage = MemoryStore::new();
        assert!(initialize(&auth, &storage).await.is_none());
    }

    #[tokio::test]
    async fn test_initialize_discards_stale_token() {
        let auth = StubAuth::default().with_me(vec![Err(unauthorized())]);
        let storage = MemoryStore::new();
        storage.set(keys::ACCESS_TOKEN, "stale").await;
        storage.set(keys::USER, "{}").await;

        assert!(initialize(&auth, &storage).await.is_none());
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }

    #[tokio::test]
    async fn test_initialize_revalidates_persisted_token() {
        let auth = StubAuth::default().with_me(vec![Ok(sample_user(true))]);
        let storage = MemoryStore::new();
        storage.set(keys::ACCESS_TOKEN, "tok-abc").await;

        let user = initialize(&auth, &storage).await.unwrap();
        assert!(user.is_admin);
        assert_eq!(auth.token().as_deref(), Some("tok-abc"));
        // The cached user is refreshed from the server copy.
        assert!(storage.get(keys::USER).await.unwrap().contains("fan@example.com"));
    }

    #[tokio::test]
    async fn test_login_then_initialize_round_trips_on_one_store() {
        let storage = MemoryStore::new();
        let auth = StubAuth::default()
            .with_login(Ok(sample_token()))
            .with_me(vec![Ok(sample_user(false))]);
        login(&auth, &storage, "fan@example.com", "pw").await.unwrap();

        // A fresh transport (think: next page load) picks the session back
        // up from the same store.
        let restarted = StubAuth::default().with_me(vec![Ok(sample_user(false))]);
        let user = initialize(&restarted, &storage).await.unwrap();
        assert_eq!(user.email, "fan@example.com");
        assert_eq!(restarted.token().as_deref(), Some("tok-abc"));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let auth = StubAuth::default();
        let storage = MemoryStore::new();
        logout(&auth, &storage).await;
        logout(&auth, &storage).await;
        assert!(auth.token().is_none());
        assert_nothing_persisted(&storage).await;
    }
}
