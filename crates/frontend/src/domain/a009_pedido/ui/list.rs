use contracts::domain::a009_pedido::{Pedido, PedidoDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn PedidoList(vm: CrudVm<Pedido, PedidoDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Pedidos"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Pedido"</th>
                        <th>"Habitación"</th>
                        <th>"Restaurante"</th>
                        <th>"Tipo de Pedido"</th>
                        <th>"Estado"</th>
                        <th>"Fecha y Hora"</th>
                        <th>"Descripción"</th>
                        <th>"Total"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="9">{Pedido::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|pedido| {
                                    let id = pedido.id_pedido;
                                    let para_editar = pedido.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(pedido.id_pedido)}</td>
                                            <td>{fmt::opt_int(pedido.id_habitacion)}</td>
                                            <td>{fmt::opt_int(pedido.id_restaurante)}</td>
                                            <td>{pedido.tipo_pedido}</td>
                                            <td>{pedido.estado}</td>
                                            <td>{pedido.fecha_hora}</td>
                                            <td>{pedido.descripcion}</td>
                                            <td>{fmt::float(pedido.total)}</td>
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
