use contracts::system::session::CurrentUser;
use leptos::prelude::*;

use super::config;

/// Session state shared across the app via context.
///
/// `current_user` is `None` until the bootstrap config has been read; the
/// header stays hidden for as long as that is the case.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub current_user: RwSignal<Option<CurrentUser>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            current_user: RwSignal::new(None),
        }
    }

    /// Update the namespace shown for the current user after a switch.
    pub fn set_namespace(&self, namespace: &str) {
        self.current_user.update(|user| {
            if let Some(user) = user {
                user.namespace = namespace.to_string();
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::new();

    match config::load_config() {
        Ok(config) => session.current_user.set(Some(config.current_user)),
        Err(e) => log::warn!("Session config unavailable: {}", e),
    }

    provide_context(session);

    children()
}

/// Hook to access session state
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
