use contracts::domain::a001_usuario::Usuario;
use contracts::domain::a002_cliente::{Cliente, ClienteDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

#[component]
pub fn ClienteForm(vm: CrudVm<Cliente, ClienteDraft>) -> impl IntoView {
    let usuarios = use_lookup::<Usuario>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let usuario_options = Signal::derive(move || {
        usuarios
            .get()
            .into_iter()
            .filter_map(|u| u.id_usuario.map(|id| (id.to_string(), u.usuario)))
            .collect::<Vec<_>>()
    });

    let (id_usuario, set_id_usuario) = bind!(form, id_usuario);
    let (nombre, set_nombre) = bind!(form, nombre);
    let (apellido, set_apellido) = bind!(form, apellido);
    let (correo, set_correo) = bind!(form, correo);
    let (telefono, set_telefono) = bind!(form, telefono);
    let (cui, set_cui) = bind!(form, cui);
    let (pasaporte, set_pasaporte) = bind!(form, pasaporte);
    let (nacionalidad, set_nacionalidad) = bind!(form, nacionalidad);
    let (direccion, set_direccion) = bind!(form, direccion);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Cliente" } else { "Crear Nuevo Cliente" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Usuario:"
                    placeholder="Selecciona un usuario"
                    value=id_usuario
                    on_change=set_id_usuario
                    options=usuario_options
                    required=true
                />
                <TextField label="Nombre:" value=nombre on_input=set_nombre required=true />
                <TextField label="Apellido:" value=apellido on_input=set_apellido />
                <TextField label="Correo:" input_type="email" value=correo on_input=set_correo />
                <TextField label="Teléfono:" input_type="number" value=telefono on_input=set_telefono />
                <TextField label="CUI:" value=cui on_input=set_cui />
                <TextField label="Pasaporte:" value=pasaporte on_input=set_pasaporte />
                <TextField label="Nacionalidad:" value=nacionalidad on_input=set_nacionalidad />
                <TextField label="Dirección:" value=direccion on_input=set_direccion />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Cliente" }}
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
