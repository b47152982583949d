//! Session state: a single broadcast value derived from the persisted
//! credential, with exactly one writer (the provider and the two actions
//! below).

use api::AuthSession;
use dioxus::prelude::*;

use crate::make_vault;

/// The broadcast session value.
///
/// `loading` is true until the first hydration attempt finishes, so route
/// guards can distinguish "not logged in" from "not yet known".
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<api::User>,
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

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current session signal. Reading it inside a component subscribes
/// the component; the provider and the session actions are the only writers.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that hydrates the session from storage on mount.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        let vault = make_vault();
        let user = vault.hydrate().await.map(|auth| auth.user);
        session.set(SessionState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Persist a fresh login and broadcast it.
pub async fn establish_session(mut session: Signal<SessionState>, auth: &AuthSession) {
    make_vault().persist(auth).await;
    session.set(SessionState {
        user: Some(auth.user.clone()),
        loading: false,
    });
}

/// Clear the persisted credential and reset the broadcast value to empty.
pub async fn clear_session(mut session: Signal<SessionState>) {
    make_vault().clear().await;
    session.set(SessionState {
        user: None,
        loading: false,
    });
}

/// Route guard for protected views: once hydration has finished, an
/// unauthenticated visitor is sent to the login page.
pub fn use_require_auth() -> Signal<SessionState> {
    let session = use_session();

    use_effect(move || {
        let state = session();
        if !state.loading && state.user.is_none() {
            tracing::info!("unauthenticated access to protected view, redirecting");
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/auth/login");
                }
            }
        }
    });

    session
}

/// Button that logs the current user out and returns to the landing page.
#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let session = use_session();

    let onclick = move |_| async move {
        clear_session(session).await;
        tracing::info!("session cleared");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "Cerrar sesión"
        }
    }
}

// The actions above are exercised against the in-memory store in
// `api::session` tests; the signal plumbing itself is framework glue.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading_and_anonymous() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }
}
