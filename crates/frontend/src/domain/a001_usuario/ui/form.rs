use contracts::domain::a001_usuario::{Usuario, UsuarioDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, TextField};
use crate::shared::crud::CrudVm;

#[component]
pub fn UsuarioForm(vm: CrudVm<Usuario, UsuarioDraft>) -> impl IntoView {
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let (usuario, set_usuario) = bind!(form, usuario);
    let (correo, set_correo) = bind!(form, correo);
    let (fecha_ultimo_acceso, set_fecha_ultimo_acceso) = bind!(form, fecha_ultimo_acceso);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Usuario" } else { "Crear Nuevo Usuario" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <TextField label="Usuario:" value=usuario on_input=set_usuario required=true />
                <TextField label="Correo:" input_type="email" value=correo on_input=set_correo required=true />
                // la contraseña solo es obligatoria al crear; al editar se
                // escribe de nuevo o se deja vacía
                <div class="mb-3">
                    <label class="form-label">"Contraseña:"</label>
                    <input
                        type="password"
                        class="form-control"
                        prop:value=move || form.with(|f| f.contrasena.clone())
                        on:input=move |ev| {
                            form.update(|f| f.contrasena = event_target_value(&ev))
                        }
                        required=move || !editing.get()
                    />
                </div>
                <TextField
                    label="Fecha Último Acceso (Opcional):"
                    input_type="date"
                    value=fecha_ultimo_acceso
                    on_input=set_fecha_ultimo_acceso
                />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Usuario" }}
                </button>
                <Show when=move || editing.get()>
                    <button
                        type="button"
                        class="btn btn-secondary ms-2"
                        on:click=move |_| vm.cancel_edit()
                    >
                        "Cancelar"
                    </button>
                </Show>
            </form>
            <BannerAlert banner=vm.form_banner />
        </div>
    }
}
