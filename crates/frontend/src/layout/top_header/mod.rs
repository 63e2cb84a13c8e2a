use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar: sidebar toggle and the application title.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                aria-label="Menú"
                on:click=move |_| ctx.toggle_left()
            >
                {move || if ctx.left_open.get() { icon("close") } else { icon("menu") }}
            </button>
            <span class="top-header__title">"Administración Hotelera"</span>
        </header>
    }
}
