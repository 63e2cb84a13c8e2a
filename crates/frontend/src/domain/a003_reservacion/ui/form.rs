use contracts::domain::a002_cliente::Cliente;
use contracts::domain::a003_reservacion::{Reservacion, ReservacionDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::form::static_options;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

const TIPOS_CLIENTE: &[&str] = &["Turista", "Ejecutivo", "Corporativo", "Grupal", "Otros"];
const ESTADOS_CANCELACION: &[&str] = &["Confirmada", "Cancelada", "Pendiente", "No Show"];

#[component]
pub fn ReservacionForm(vm: CrudVm<Reservacion, ReservacionDraft>) -> impl IntoView {
    let clientes = use_lookup::<Cliente>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let cliente_options = Signal::derive(move || {
        clientes
            .get()
            .into_iter()
            .filter_map(|c| {
                c.id_cliente
                    .map(|id| (id.to_string(), format!("{} {}", c.nombre, c.apellido)))
            })
            .collect::<Vec<_>>()
    });

    let (id_cliente, set_id_cliente) = bind!(form, id_cliente);
    let (tipo_cliente, set_tipo_cliente) = bind!(form, tipo_cliente);
    let (fecha_reserva, set_fecha_reserva) = bind!(form, fecha_reserva);
    let (hora_reserva, set_hora_reserva) = bind!(form, hora_reserva);
    let (dias_reserva, set_dias_reserva) = bind!(form, dias_reserva);
    let (estado_cancelacion, set_estado_cancelacion) = bind!(form, estado_cancelacion);
    let (total, set_total) = bind!(form, total);
    let (comentario, set_comentario) = bind!(form, comentario);

    view! {
        <div class="container my-4">
            <h2>
                {move || if editing.get() { "Editar Reservación" } else { "Crear Nueva Reservación" }}
            </h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Cliente:"
                    placeholder="Selecciona un cliente"
                    value=id_cliente
                    on_change=set_id_cliente
                    options=cliente_options
                    required=true
                />
                <SelectField
                    label="Tipo de Cliente:"
                    placeholder="Selecciona un tipo de cliente"
                    value=tipo_cliente
                    on_change=set_tipo_cliente
                    options=static_options(TIPOS_CLIENTE)
                    required=true
                />
                <TextField
                    label="Fecha de Reserva:"
                    input_type="date"
                    value=fecha_reserva
                    on_input=set_fecha_reserva
                    required=true
                />
                <TextField
                    label="Hora de Reserva:"
                    input_type="time"
                    value=hora_reserva
                    on_input=set_hora_reserva
                    required=true
                />
                <TextField
                    label="Días de Reserva:"
                    input_type="number"
                    value=dias_reserva
                    on_input=set_dias_reserva
                />
                <SelectField
                    label="Estado de Cancelación:"
                    placeholder="Selecciona el estado de la cancelación"
                    value=estado_cancelacion
                    on_change=set_estado_cancelacion
                    options=static_options(ESTADOS_CANCELACION)
                    required=true
                />
                <TextField label="Total:" input_type="number" value=total on_input=set_total />
                <TextField label="Comentario:" value=comentario on_input=set_comentario />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Reservación" }}
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
