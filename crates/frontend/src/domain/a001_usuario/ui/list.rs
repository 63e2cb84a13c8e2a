use contracts::domain::a001_usuario::{Usuario, UsuarioDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn UsuarioList(vm: CrudVm<Usuario, UsuarioDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Usuarios"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Usuario"</th>
                        <th>"Usuario"</th>
                        <th>"Correo"</th>
                        <th>"Fecha Último Acceso"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="5">{Usuario::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|usuario| {
                                    let id = usuario.id_usuario;
                                    let para_editar = usuario.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(usuario.id_usuario)}</td>
                                            <td>{usuario.usuario}</td>
                                            <td>{usuario.correo}</td>
                                            <td>{usuario.fecha_ultimo_acceso}</td>
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
