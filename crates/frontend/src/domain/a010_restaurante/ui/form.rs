use contracts::domain::a010_restaurante::{Restaurante, RestauranteDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, TextField};
use crate::shared::crud::CrudVm;

#[component]
pub fn RestauranteForm(vm: CrudVm<Restaurante, RestauranteDraft>) -> impl IntoView {
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let (nombre, set_nombre) = bind!(form, nombre);
    let (ubicacion, set_ubicacion) = bind!(form, ubicacion);
    let (descripcion, set_descripcion) = bind!(form, descripcion);

    view! {
        <div class="container my-4">
            <h2>
                {move || if editing.get() { "Editar Restaurante" } else { "Crear Nuevo Restaurante" }}
            </h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <TextField label="Nombre:" value=nombre on_input=set_nombre required=true />
                <TextField label="Ubicación:" value=ubicacion on_input=set_ubicacion />
                <TextField label="Descripción:" value=descripcion on_input=set_descripcion />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Restaurante" }}
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
