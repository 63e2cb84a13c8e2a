use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let usuario = username.get();
        let contrasena = password.get();

        spawn_local(async move {
            match api::login(usuario, contrasena).await {
                Ok(response) if response.success => {
                    session.login(response.role);
                }
                Ok(response) => {
                    set_error_message.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Credenciales inválidas".to_string()),
                    ));
                }
                Err(e) => set_error_message.set(Some(e)),
            }
        });
    };

    view! {
        <div class="login-container">
            <h2>"Iniciar Sesión"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Usuario"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Contraseña"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
                <button type="submit">"Login"</button>
            </form>
            {move || {
                error_message
                    .get()
                    .map(|e| view! { <p style="color: red">{e}</p> })
            }}
        </div>
    }
}
