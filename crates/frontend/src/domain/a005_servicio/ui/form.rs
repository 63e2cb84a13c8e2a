use contracts::domain::a005_servicio::{Servicio, ServicioDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, TextField};
use crate::shared::crud::CrudVm;

#[component]
pub fn ServicioForm(vm: CrudVm<Servicio, ServicioDraft>) -> impl IntoView {
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let (tipo_servicio, set_tipo_servicio) = bind!(form, tipo_servicio);
    let (duracion, set_duracion) = bind!(form, duracion);
    let (descripcion, set_descripcion) = bind!(form, descripcion);
    let (fecha_hora, set_fecha_hora) = bind!(form, fecha_hora);
    let (precio, set_precio) = bind!(form, precio);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Servicio" } else { "Crear Nuevo Servicio" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <TextField
                    label="Tipo de Servicio:"
                    value=tipo_servicio
                    on_input=set_tipo_servicio
                    required=true
                />
                <TextField label="Duración:" value=duracion on_input=set_duracion />
                <TextField label="Descripción:" value=descripcion on_input=set_descripcion />
                <TextField
                    label="Fecha y Hora:"
                    input_type="datetime-local"
                    value=fecha_hora
                    on_input=set_fecha_hora
                />
                <TextField
                    label="Precio:"
                    input_type="number"
                    step="0.01"
                    value=precio
                    on_input=set_precio
                    required=true
                />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Servicio" }}
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
