use contracts::domain::a001_usuario::Usuario;
use contracts::domain::a012_empleado::{Empleado, EmpleadoDraft};
use leptos::prelude::*;

use crate::bind;
use crate::shared::components::form::static_options;
use crate::shared::components::{BannerAlert, SelectField, TextField};
use crate::shared::crud::{use_lookup, CrudVm};

const ROLES: &[&str] = &["Recepcionista", "Gerente", "Limpieza", "Mantenimiento"];
const ESTADOS: &[&str] = &["Activo", "No Activo"];
const GENEROS: &[&str] = &["Masculino", "Femenino"];

#[component]
pub fn EmpleadoForm(vm: CrudVm<Empleado, EmpleadoDraft>) -> impl IntoView {
    let usuarios = use_lookup::<Usuario>();
    let form = vm.form;
    let editing = Signal::derive(move || vm.edit.with(|e| e.is_editing()));

    let usuario_options = Signal::derive(move || {
        usuarios
            .get()
            .into_iter()
            .filter_map(|u| u.id_usuario.map(|id| (id.to_string(), u.usuario)))
            .collect::<Vec<_>>()
    });

    let (id_usuario, set_id_usuario) = bind!(form, id_usuario);
    let (nombre, set_nombre) = bind!(form, nombre);
    let (apellido, set_apellido) = bind!(form, apellido);
    let (correo, set_correo) = bind!(form, correo);
    let (telefono, set_telefono) = bind!(form, telefono);
    let (cui, set_cui) = bind!(form, cui);
    let (nit, set_nit) = bind!(form, nit);
    let (rol_administrativo, set_rol_administrativo) = bind!(form, rol_administrativo);
    let (fecha_contrato, set_fecha_contrato) = bind!(form, fecha_contrato);
    let (estado, set_estado) = bind!(form, estado);
    let (turno, set_turno) = bind!(form, turno);
    let (salario, set_salario) = bind!(form, salario);
    let (genero, set_genero) = bind!(form, genero);
    let (departamento, set_departamento) = bind!(form, departamento);
    let (fecha_despido, set_fecha_despido) = bind!(form, fecha_despido);

    view! {
        <div class="container my-4">
            <h2>{move || if editing.get() { "Editar Empleado" } else { "Crear Nuevo Empleado" }}</h2>
            <form class="mt-3" on:submit=move |ev| { ev.prevent_default(); vm.submit(); }>
                <SelectField
                    label="Usuario:"
                    placeholder="Selecciona un usuario"
                    value=id_usuario
                    on_change=set_id_usuario
                    options=usuario_options
                    required=true
                />
                <TextField label="Nombre:" value=nombre on_input=set_nombre required=true />
                <TextField label="Apellido:" value=apellido on_input=set_apellido />
                <TextField label="Correo:" input_type="email" value=correo on_input=set_correo />
                <TextField
                    label="Teléfono:"
                    input_type="number"
                    value=telefono
                    on_input=set_telefono
                />
                <TextField label="CUI:" value=cui on_input=set_cui />
                <TextField label="NIT:" value=nit on_input=set_nit />
                <SelectField
                    label="Rol Administrativo:"
                    placeholder="Selecciona un rol"
                    value=rol_administrativo
                    on_change=set_rol_administrativo
                    options=static_options(ROLES)
                    required=true
                />
                <TextField
                    label="Fecha de Contrato:"
                    input_type="date"
                    value=fecha_contrato
                    on_input=set_fecha_contrato
                />
                <SelectField
                    label="Estado:"
                    placeholder="Selecciona un estado"
                    value=estado
                    on_change=set_estado
                    options=static_options(ESTADOS)
                    required=true
                />
                <TextField label="Turno:" value=turno on_input=set_turno />
                <TextField label="Salario:" input_type="number" value=salario on_input=set_salario />
                <SelectField
                    label="Género:"
                    placeholder="Selecciona un género"
                    value=genero
                    on_change=set_genero
                    options=static_options(GENEROS)
                    required=true
                />
                <TextField label="Departamento:" value=departamento on_input=set_departamento />
                <TextField
                    label="Fecha de Despido:"
                    input_type="date"
                    value=fecha_despido
                    on_input=set_fecha_despido
                />
                <button type="submit" class="btn btn-primary">
                    {move || if editing.get() { "Guardar Cambios" } else { "Crear Empleado" }}
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
