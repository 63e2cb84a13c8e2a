use contracts::domain::a006_factura::Factura;
use contracts::domain::a008_pago::{Pago, PagoDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};
use crate::shared::fmt;

#[component]
pub fn PagoForm(vm: CrudVm<Pago, PagoDraft>) -> impl IntoView {
    let facturas = use_lookup::<Factura>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let factura_options = Signal::derive(move || {
        facturas
            .get()
            .into_iter()
            .filter_map(|f| {
                f.id_factura.map(|id| {
                    (
                        id.to_string(),
                        format!("{} - Total: {}", id, fmt::opt_float(f.total)),
                    )
                })
            })
            .collect::<Vec<_>>()
    });

    let (id_factura, set_id_factura) = bind!(form, id_factura);
    let (fecha_pago, set_fecha_pago) = bind!(form, fecha_pago);
    let (monto, set_monto) = bind!(form, monto);
    let (metodo_pago, set_metodo_pago) = bind!(form, metodo_pago);
    let (estado, set_estado) = bind!(form, estado);
    let (comentario, set_comentario) = bind!(form, comentario);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Pago" } else { "Registrar Nuevo Pago" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Factura:"
                    placeholder="Selecciona una factura"
                    value=id_factura
                    on_change=set_id_factura
                    options=factura_options
                    required=true
                />
                <TextField
                    label="Fecha de Pago:"
                    input_type="date"
                    value=fecha_pago
                    on_input=set_fecha_pago
                    required=true
                />
                <TextField
                    label="Monto:"
                    input_type="number"
                    step="0.01"
                    value=monto
                    on_input=set_monto
                    required=true
                />
                <TextField label="Método de Pago:" value=metodo_pago on_input=set_metodo_pago />
                <TextField label="Estado:" value=estado on_input=set_estado />
                <TextField label="Comentario:" value=comentario on_input=set_comentario />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Registrar Pago" }}
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
