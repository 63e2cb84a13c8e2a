//! Navigation sidebar.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuEntry {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Declarative metadata only: no screen checks these against an
    /// identity. A future authorization layer would.
    roles: &'static [&'static str],
}

fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            key: "d100_resumen",
            label: tab_label_for_key("d100_resumen"),
            icon: "home",
            roles: &["admin", "recepcionista", "cliente"],
        },
        MenuEntry {
            key: "a001_usuarios",
            label: tab_label_for_key("a001_usuarios"),
            icon: "user",
            roles: &["admin"],
        },
        MenuEntry {
            key: "a002_clientes",
            label: tab_label_for_key("a002_clientes"),
            icon: "users",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a003_reservaciones",
            label: tab_label_for_key("a003_reservaciones"),
            icon: "calendar",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a004_habitaciones",
            label: tab_label_for_key("a004_habitaciones"),
            icon: "bed",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a005_servicios",
            label: tab_label_for_key("a005_servicios"),
            icon: "bell",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a007_facturacion",
            label: tab_label_for_key("a007_facturacion"),
            icon: "invoice",
            roles: &["admin"],
        },
        MenuEntry {
            key: "a008_pagos",
            label: tab_label_for_key("a008_pagos"),
            icon: "cash",
            roles: &["admin", "cliente"],
        },
        MenuEntry {
            key: "a009_pedidos",
            label: tab_label_for_key("a009_pedidos"),
            icon: "clipboard",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a010_restaurante",
            label: tab_label_for_key("a010_restaurante"),
            icon: "utensils",
            roles: &["admin", "recepcionista"],
        },
        MenuEntry {
            key: "a011_reportes",
            label: tab_label_for_key("a011_reportes"),
            icon: "chart",
            roles: &["admin"],
        },
        MenuEntry {
            key: "a012_empleados",
            label: tab_label_for_key("a012_empleados"),
            icon: "briefcase",
            roles: &["admin", "recepcionista"],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();

    view! {
        <nav class="nav-menu">
            <ul class="nav-menu__items">
                {menu_entries()
                    .into_iter()
                    .map(|entry| {
                        let is_active = move || {
                            tabs_store.active.get().as_deref() == Some(entry.key)
                        };
                        view! {
                            <li class="nav-menu__item">
                                <button
                                    class="nav-menu__link"
                                    class:nav-menu__link--active=is_active
                                    data-roles=entry.roles.join(",")
                                    on:click=move |_| {
                                        tabs_store.open_tab(entry.key, entry.label)
                                    }
                                >
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="nav-menu__item nav-menu__item--logout">
                    <button class="nav-menu__link" on:click=move |_| session.logout()>
                        {icon("logout")}
                        <span>"Cerrar Sesión"</span>
                    </button>
                </li>
            </ul>
        </nav>
    }
}
