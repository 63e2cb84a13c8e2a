use contracts::domain::a004_habitacion::{Habitacion, HabitacionDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn HabitacionList(vm: CrudVm<Habitacion, HabitacionDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Habitaciones"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Habitación"</th>
                        <th>"Servicio"</th>
                        <th>"Número"</th>
                        <th>"Tipo"</th>
                        <th>"Camas"</th>
                        <th>"Tipo de Cama"</th>
                        <th>"Estado"</th>
                        <th>"Precio"</th>
                        <th>"Descuento"</th>
                        <th>"Descripción"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="11">{Habitacion::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|habitacion| {
                                    let id = habitacion.id_habitacion;
                                    let para_editar = habitacion.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(habitacion.id_habitacion)}</td>
                                            <td>{fmt::opt_int(habitacion.id_servicio)}</td>
                                            <td>{habitacion.num_habitacion}</td>
                                            <td>{habitacion.tipo_habitacion}</td>
                                            <td>{habitacion.numero_camas}</td>
                                            <td>{habitacion.tipo_de_cama}</td>
                                            <td>{habitacion.estado}</td>
                                            <td>{fmt::float(habitacion.precio)}</td>
                                            <td>{fmt::float(habitacion.descuento)}</td>
                                            <td>{habitacion.descripcion}</td>
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
