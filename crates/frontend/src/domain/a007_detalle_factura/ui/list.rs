use contracts::domain::a007_detalle_factura::{DetalleFactura, DetalleFacturaDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn DetalleFacturaList(vm: CrudVm<DetalleFactura, DetalleFacturaDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Detalles de Facturación"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Detalle"</th>
                        <th>"Factura"</th>
                        <th>"Descripción"</th>
                        <th>"Cantidad"</th>
                        <th>"Precio Unitario"</th>
                        <th>"Subtotal"</th>
                        <th>"Total Item"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="8">{DetalleFactura::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|detalle| {
                                    let id = detalle.id_detalle;
                                    let para_editar = detalle.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(detalle.id_detalle)}</td>
                                            <td>{fmt::opt_int(detalle.id_factura)}</td>
                                            <td>{detalle.descripcion}</td>
                                            <td>{detalle.cantidad}</td>
                                            <td>{fmt::float(detalle.precio_unitario)}</td>
                                            <td>{fmt::float(detalle.subtotal)}</td>
                                            <td>{fmt::float(detalle.total_item)}</td>
                                            <td>
                                                <button
                                                    class="btn btn-warning btn-sm me-2"
                                                    on:click=move |_| vm.begin_edit(para_editar.clone())
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn-danger btn-sm"
                                                    on:click=move |_| {
                                                        if let Some(id) = id {
                                                            vm.delete(id);
                                                        }
                                                    }
                                                >
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
