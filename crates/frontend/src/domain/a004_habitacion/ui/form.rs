use contracts::domain::a004_habitacion::{Habitacion, HabitacionDraft};
use contracts::domain::a005_servicio::Servicio;
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

#[component]
pub fn HabitacionForm(vm: CrudVm<Habitacion, HabitacionDraft>) -> impl IntoView {
    let servicios = use_lookup::<Servicio>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let servicio_options = Signal::derive(move || {
        servicios
            .get()
            .into_iter()
            .filter_map(|s| s.id_servicio.map(|id| (id.to_string(), s.tipo_servicio)))
            .collect::<Vec<_>>()
    });

    let (id_servicio, set_id_servicio) = bind!(form, id_servicio);
    let (num_habitacion, set_num_habitacion) = bind!(form, num_habitacion);
    let (tipo_habitacion, set_tipo_habitacion) = bind!(form, tipo_habitacion);
    let (numero_camas, set_numero_camas) = bind!(form, numero_camas);
    let (tipo_de_cama, set_tipo_de_cama) = bind!(form, tipo_de_cama);
    let (estado, set_estado) = bind!(form, estado);
    let (precio, set_precio) = bind!(form, precio);
    let (descuento, set_descuento) = bind!(form, descuento);
    let (descripcion, set_descripcion) = bind!(form, descripcion);

    view! {
        <div class="container my-4">
            <h2>
                {move || if editing.get() { "Editar Habitación" } else { "Crear Nueva Habitación" }}
            </h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Servicio:"
                    placeholder="Selecciona un servicio"
                    value=id_servicio
                    on_change=set_id_servicio
                    options=servicio_options
                    required=true
                />
                <TextField
                    label="Número de Habitación:"
                    value=num_habitacion
                    on_input=set_num_habitacion
                    required=true
                />
                <TextField
                    label="Tipo de Habitación:"
                    value=tipo_habitacion
                    on_input=set_tipo_habitacion
                    required=true
                />
                <TextField
                    label="Número de Camas:"
                    input_type="number"
                    value=numero_camas
                    on_input=set_numero_camas
                    required=true
                />
                <TextField label="Tipo de Cama:" value=tipo_de_cama on_input=set_tipo_de_cama />
                <TextField label="Estado:" value=estado on_input=set_estado />
                <TextField
                    label="Precio:"
                    input_type="number"
                    step="0.01"
                    value=precio
                    on_input=set_precio
                    required=true
                />
                <TextField
                    label="Descuento:"
                    input_type="number"
                    step="0.01"
                    value=descuento
                    on_input=set_descuento
                />
                <TextField label="Descripción:" value=descripcion on_input=set_descripcion />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Habitación" }}
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
