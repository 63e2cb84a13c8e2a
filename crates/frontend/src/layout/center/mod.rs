use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Tab strip plus the stack of open tab pages.
#[component]
pub fn CenterTabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key_for_click = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        let key_for_active = tab.key.clone();
                        let is_active = move || {
                            tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                        };
                        view! {
                            <span
                                class="tabs__tab"
                                class:tabs__tab--active=is_active
                                on:click=move |_| tabs_store.activate_tab(&key_for_click)
                            >
                                {tab.title.clone()}
                                <button
                                    class="tabs__close"
                                    aria-label="Cerrar"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    {icon("close")}
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}
