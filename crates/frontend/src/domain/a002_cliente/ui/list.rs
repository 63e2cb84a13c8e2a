use contracts::domain::a002_cliente::{Cliente, ClienteDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn ClienteList(vm: CrudVm<Cliente, ClienteDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Clientes"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Usuario"</th>
                        <th>"Nombre"</th>
                        <th>"Apellido"</th>
                        <th>"Correo"</th>
                        <th>"Teléfono"</th>
                        <th>"CUI"</th>
                        <th>"Pasaporte"</th>
                        <th>"Nacionalidad"</th>
                        <th>"Dirección"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="10">{Cliente::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|cliente| {
                                    let id = cliente.id_cliente;
                                    let para_editar = cliente.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(cliente.id_usuario)}</td>
                                            <td>{cliente.nombre}</td>
                                            <td>{cliente.apellido}</td>
                                            <td>{cliente.correo}</td>
                                            <td>{cliente.telefono}</td>
                                            <td>{cliente.cui}</td>
                                            <td>{cliente.pasaporte}</td>
                                            <td>{cliente.nacionalidad}</td>
                                            <td>{cliente.direccion}</td>
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
