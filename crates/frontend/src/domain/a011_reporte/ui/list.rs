use contracts::domain::a011_reporte::{Reporte, ReporteDraft};
use contracts::domain::common::CrudResource;
use leptos::prelude::*;

use crate::shared::crud::CrudVm;
use crate::shared::fmt;

#[component]
pub fn ReporteList(vm: CrudVm<Reporte, ReporteDraft>) -> impl IntoView {
    view! {
        <div class="container my-4">
            <h2>"Lista de Reportes"</h2>
            <table class="table table-striped mt-3">
                <thead>
                    <tr>
                        <th>"ID Reporte"</th>
                        <th>"Empleado"</th>
                        <th>"Departamento"</th>
                        <th>"Fecha Generado"</th>
                        <th>"Detalle"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vm.list.with(|l| !l.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="6">{Reporte::MESSAGES.empty_list}</td>
                            </tr>
                        }
                    >
                        {move || {
                            vm.list
                                .with(|l| l.records().to_vec())
                                .into_iter()
                                .map(|reporte| {
                                    let id = reporte.id_reporte;
                                    let para_editar = reporte.clone();
                                    view! {
                                        <tr>
                                            <td>{fmt::opt_int(reporte.id_reporte)}</td>
                                            <td>{fmt::opt_int(reporte.id_empleado)}</td>
                                            <td>{reporte.departamento}</td>
                                            <td>{reporte.fecha_generado}</td>
                                            <td>{reporte.detalle}</td>
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
