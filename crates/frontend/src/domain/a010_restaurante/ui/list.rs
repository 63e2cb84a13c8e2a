use contracts::domain::a010_restaurante::{Restaurante, RestauranteDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn RestauranteList(vm: CrudVm<Restaurante, RestauranteDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Restaurantes"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Restaurante"</th>
                        <th>"Nombre"</th>
                        <th>"Ubicación"</th>
                        <th>"Descripción"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="5">{Restaurante::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|restaurante| {
                                    let id = restaurante.id_restaurante;
                                    let para_editar = restaurante.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(restaurante.id_restaurante)}</td>
                                            <td>{restaurante.nombre}</td>
                                            <td>{restaurante.ubicacion}</td>
                                            <td>{restaurante.descripcion}</td>
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
