use contracts::domain::a012_empleado::{Empleado, EmpleadoDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

/// La tabla muestra un resumen; el resto de campos se ve al editar.
#[component]
pub fn EmpleadoList(vm: CrudVm<Empleado, EmpleadoDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Empleados"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Empleado"</th>
                        <th>"Nombre"</th>
                        <th>"Apellido"</th>
                        <th>"Correo"</th>
                        <th>"Rol Administrativo"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="6">{Empleado::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|empleado| {
                                    let id = empleado.id_empleado;
                                    let para_editar = empleado.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(empleado.id_empleado)}</td>
                                            <td>{empleado.nombre}</td>
                                            <td>{empleado.apellido}</td>
                                            <td>{empleado.correo}</td>
                                            <td>{empleado.rol_administrativo}</td>
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
