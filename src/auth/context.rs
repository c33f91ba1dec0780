//! Authentication context provider

use dioxus::prelude::*;

use crate::api::ApiContext;
use crate::auth::session::SessionStore;
use crate::types::User;

/// Reactive copy of the signed-in user, provided to the entire app.
/// Persistence lives in [`SessionStore`]; this context mirrors it so screens
/// re-render on login and logout.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current signed-in user (if any)
    pub user: Signal<Option<User>>,
}

impl AuthContext {
    /// Check if a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Lowercased role of the signed-in user, empty when signed out
    pub fn role_key(&self) -> String {
        self.user
            .read()
            .as_ref()
            .map(User::role_key)
            .unwrap_or_default()
    }

    /// Admins and managers share the management console
    pub fn can_manage(&self) -> bool {
        matches!(self.role_key().as_str(), "admin" | "manager")
    }

    /// Display name for headers and menus
    pub fn display_name(&self) -> String {
        self.user
            .read()
            .as_ref()
            .map(User::display_name)
            .unwrap_or_default()
    }

    /// Record a successful login in storage and in the reactive state
    pub fn log_in(mut self, session: &SessionStore, token: &str, user: User) {
        session.set_session(token, &user);
        self.user.set(Some(user));
    }

    /// Drop the session (logout control)
    pub fn log_out(mut self, session: &SessionStore) {
        session.clear_session();
        self.user.set(None);
    }
}

/// Provider component that wires up the session store, the auth context and
/// the typed API clients for everything below it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(SessionStore::for_target);

    // Restore a persisted session on startup. A stored user without a token
    // does not count as signed in.
    let user = use_signal(|| {
        if session.is_authenticated() {
            session.user()
        } else {
            None
        }
    });

    use_context_provider(|| session.clone());
    use_context_provider(|| AuthContext { user });
    use_context_provider(|| ApiContext::new(session.clone()));

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Hook to access the shared session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}
