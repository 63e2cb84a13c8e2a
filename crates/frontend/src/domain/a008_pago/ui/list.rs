use contracts::domain::a008_pago::{Pago, PagoDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn PagoList(vm: CrudVm<Pago, PagoDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Pagos"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Pago"</th>
                        <th>"Factura"</th>
                        <th>"Fecha de Pago"</th>
                        <th>"Monto"</th>
                        <th>"Método de Pago"</th>
                        <th>"Estado"</th>
                        <th>"Comentario"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="8">{Pago::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|pago| {
                                    let id = pago.id_pago;
                                    let para_editar = pago.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(pago.id_pago)}</td>
                                            <td>{fmt::opt_int(pago.id_factura)}</td>
                                            <td>{pago.fecha_pago}</td>
                                            <td>{fmt::opt_float(pago.monto)}</td>
                                            <td>{pago.metodo_pago}</td>
                                            <td>{pago.estado}</td>
                                            <td>{pago.comentario}</td>
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
