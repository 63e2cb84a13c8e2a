use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::system::auth::context::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab store and session are provided to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(Session::new());

    view! {
        <AppRoutes />
    }
}
