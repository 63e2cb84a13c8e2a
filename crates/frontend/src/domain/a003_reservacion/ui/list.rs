use contracts::domain::a003_reservacion::{Reservacion, ReservacionDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn ReservacionList(vm: CrudVm<Reservacion, ReservacionDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Reservaciones"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Cliente"</th>
                        <th>"Tipo de Cliente"</th>
                        <th>"Fecha de Reserva"</th>
                        <th>"Hora de Reserva"</th>
                        <th>"Días de Reserva"</th>
                        <th>"Estado de Cancelación"</th>
                        <th>"Total"</th>
                        <th>"Comentario"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="9">{Reservacion::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|reservacion| {
                                    let id = reservacion.id_reservacion;
                                    let para_editar = reservacion.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(reservacion.id_cliente)}</td>
                                            <td>{reservacion.tipo_cliente}</td>
                                            <td>{reservacion.fecha_reserva}</td>
                                            <td>{reservacion.hora_reserva}</td>
                                            <td>{fmt::opt_int(reservacion.dias_reserva)}</td>
                                            <td>{reservacion.estado_cancelacion}</td>
                                            <td>{fmt::opt_float(reservacion.total)}</td>
                                            <td>{reservacion.comentario}</td>
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
