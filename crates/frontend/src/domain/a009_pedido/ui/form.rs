use contracts::domain::a004_habitacion::Habitacion;
use contracts::domain::a009_pedido::{Pedido, PedidoDraft};
use contracts::domain::a010_restaurante::Restaurante;
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::form::static_options;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

const ESTADOS: &[&str] = &["Disponible", "Ocupado", "Mantenimiento", "Reservado"];

#[component]
pub fn PedidoForm(vm: CrudVm<Pedido, PedidoDraft>) -> impl IntoView {
    let habitaciones = use_lookup::<Habitacion>();
    let restaurantes = use_lookup::<Restaurante>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let habitacion_options = Signal::derive(move || {
        habitaciones
            .get()
            .into_iter()
            .filter_map(|h| h.id_habitacion.map(|id| (id.to_string(), h.tipo_habitacion)))
            .collect::<Vec<_>>()
    });
    let restaurante_options = Signal::derive(move || {
        restaurantes
            .get()
            .into_iter()
            .filter_map(|r| r.id_restaurante.map(|id| (id.to_string(), r.nombre)))
            .collect::<Vec<_>>()
    });

    let (id_habitacion, set_id_habitacion) = bind!(form, id_habitacion);
    let (id_restaurante, set_id_restaurante) = bind!(form, id_restaurante);
    let (tipo_pedido, set_tipo_pedido) = bind!(form, tipo_pedido);
    let (estado, set_estado) = bind!(form, estado);
    let (fecha_hora, set_fecha_hora) = bind!(form, fecha_hora);
    let (descripcion, set_descripcion) = bind!(form, descripcion);
    let (total, set_total) = bind!(form, total);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Pedido" } else { "Crear Nuevo Pedido" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Habitación:"
                    placeholder="Selecciona una habitación"
                    value=id_habitacion
                    on_change=set_id_habitacion
                    options=habitacion_options
                    required=true
                />
                <SelectField
                    label="Restaurante:"
                    placeholder="Selecciona un restaurante"
                    value=id_restaurante
                    on_change=set_id_restaurante
                    options=restaurante_options
                    required=true
                />
                <TextField label="Tipo de Pedido:" value=tipo_pedido on_input=set_tipo_pedido />
                <SelectField
                    label="Estado:"
                    placeholder="Selecciona un estado"
                    value=estado
                    on_change=set_estado
                    options=static_options(ESTADOS)
                    required=true
                />
                <TextField
                    label="Fecha y Hora:"
                    input_type="datetime-local"
                    value=fecha_hora
                    on_input=set_fecha_hora
                    required=true
                />
                <TextField label="Descripción:" value=descripcion on_input=set_descripcion />
                <TextField
                    label="Total:"
                    input_type="number"
                    step="0.01"
                    value=total
                    on_input=set_total
                />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Pedido" }}
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
