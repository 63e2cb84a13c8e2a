use contracts::domain::a006_factura::Factura;
use contracts::domain::a007_detalle_factura::{DetalleFactura, DetalleFacturaDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};
use crate::shared::fmt;

#[component]
pub fn DetalleFacturaForm(vm: CrudVm<DetalleFactura, DetalleFacturaDraft>) -> impl IntoView {
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
    let (descripcion, set_descripcion) = bind!(form, descripcion);
    let (cantidad, set_cantidad) = bind!(form, cantidad);
    let (precio_unitario, set_precio_unitario) = bind!(form, precio_unitario);
    let (subtotal, set_subtotal) = bind!(form, subtotal);
    let (total_item, set_total_item) = bind!(form, total_item);

    view! {
        <div class="container my-4">
            <h2>
                {move || {
                    if editing.get() {
                        "Editar Detalle de Facturación"
                    } else {
                        "Crear Nuevo Detalle de Facturación"
                    }
                }}
            </h2>
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
                    label="Descripción:"
                    value=descripcion
                    on_input=set_descripcion
                    maxlength="100"
                />
                <TextField
                    label="Cantidad:"
                    input_type="number"
                    value=cantidad
                    on_input=set_cantidad
                    required=true
                />
                <TextField
                    label="Precio Unitario:"
                    input_type="number"
                    step="0.01"
                    value=precio_unitario
                    on_input=set_precio_unitario
                />
                <TextField
                    label="Subtotal:"
                    input_type="number"
                    step="0.01"
                    value=subtotal
                    on_input=set_subtotal
                />
                <TextField
                    label="Total Item:"
                    input_type="number"
                    step="0.01"
                    value=total_item
                    on_input=set_total_item
                />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Detalle" }}
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
