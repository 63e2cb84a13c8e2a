use contracts::domain::a011_reporte::{Reporte, ReporteDraft};
use contracts::domain::a012_empleado::Empleado;
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

#[component]
pub fn ReporteForm(vm: CrudVm<Reporte, ReporteDraft>) -> impl IntoView {
    let empleados = use_lookup::<Empleado>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let empleado_options = Signal::derive(move || {
        empleados
            .get()
            .into_iter()
            .filter_map(|e| {
                e.id_empleado
                    .map(|id| (id.to_string(), format!("{} {}", e.nombre, e.apellido)))
            })
            .collect::<Vec<_>>()
    });

    let (id_empleado, set_id_empleado) = bind!(form, id_empleado);
    let (departamento, set_departamento) = bind!(form, departamento);
    let (fecha_generado, set_fecha_generado) = bind!(form, fecha_generado);
    let (detalle, set_detalle) = bind!(form, detalle);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Reporte" } else { "Crear Nuevo Reporte" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Empleado:"
                    placeholder="Selecciona un empleado"
                    value=id_empleado
                    on_change=set_id_empleado
                    options=empleado_options
                    required=true
                />
                <TextField label="Departamento:" value=departamento on_input=set_departamento />
                <TextField
                    label="Fecha Generado:"
                    input_type="date"
                    value=fecha_generado
                    on_input=set_fecha_generado
                    required=true
                />
                <TextField label="Detalle:" value=detalle on_input=set_detalle />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Reporte" }}
                </button>
                <Show when=move || editing.get()>
                    <button
                        type="button"
                        class="btn btn-secondary ms-2"
                        on:click=move |_| vm.cancel_edit()
                    >
                        "Cancelar"
                    </button>
                </Show>
            </form>
            <BannerAlert banner=vm.form_banner />
        </div>
    }
}
