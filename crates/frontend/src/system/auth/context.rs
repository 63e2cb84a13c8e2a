use leptos::prelude::*;

/// Session scaffolding. Access control was never enforced in this tool:
/// the session starts authenticated and the role reported by the login
/// endpoint is stored but consulted by nothing. A real identity context
/// would replace this if authorization is ever required.
#[derive(Clone, Copy)]
pub struct Session {
    pub authenticated: RwSignal<bool>,
    pub role: RwSignal<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(true),
            role: RwSignal::new(None),
        }
    }

    pub fn login(&self, role: Option<String>) {
        self.role.set(role);
        self.authenticated.set(true);
    }

    pub fn logout(&self) {
        self.role.set(None);
        self.authenticated.set(false);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in context")
}
