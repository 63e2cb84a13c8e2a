use contracts::domain::a005_servicio::{Servicio, ServicioDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn ServicioList(vm: CrudVm<Servicio, ServicioDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Servicios"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Servicio"</th>
                        <th>"Tipo"</th>
                        <th>"Duración"</th>
                        <th>"Descripción"</th>
                        <th>"Fecha y Hora"</th>
                        <th>"Precio"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="7">{Servicio::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|servicio| {
                                    let id = servicio.id_servicio;
                                    let para_editar = servicio.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(servicio.id_servicio)}</td>
                                            <td>{servicio.tipo_servicio}</td>
                                            <td>{servicio.duracion}</td>
                                            <td>{servicio.descripcion}</td>
                                            <td>{servicio.fecha_hora.unwrap_or_default()}</td>
                                            <td>{fmt::opt_float(servicio.precio)}</td>
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
