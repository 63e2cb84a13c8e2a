use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Empleado del hotel. Es el registro más ancho de la API; las fechas de
/// contrato y despido viajan como fecha o null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empleado {
    #[serde(rename = "ID_EMPLEADO", default, skip_serializing_if = "Option::is_none")]
    pub id_empleado: Option<i64>,
    #[serde(rename = "ID_USUARIO", default)]
    pub id_usuario: Option<i64>,
    #[serde(rename = "CUI", default, deserialize_with = "lenient_string")]
    pub cui: String,
    #[serde(rename = "NIT", default, deserialize_with = "lenient_string")]
    pub nit: String,
    #[serde(rename = "NOMBRE", default, deserialize_with = "lenient_string")]
    pub nombre: String,
    #[serde(rename = "APELLIDO", default, deserialize_with = "lenient_string")]
    pub apellido: String,
    #[serde(rename = "CORREO", default, deserialize_with = "lenient_string")]
    pub correo: String,
    #[serde(rename = "TELEFONO", default, deserialize_with = "lenient_string")]
    pub telefono: String,
    #[serde(rename = "ROL_ADMINISTRATIVO", default, deserialize_with = "lenient_string")]
    pub rol_administrativo: String,
    #[serde(rename = "FECHA_CONTRATO", default)]
    pub fecha_contrato: Option<String>,
    #[serde(rename = "ESTADO", default, deserialize_with = "lenient_string")]
    pub estado: String,
    #[serde(rename = "TURNO", default, deserialize_with = "lenient_string")]
    pub turno: String,
    #[serde(rename = "SALARIO", default)]
    pub salario: Option<f64>,
    #[serde(rename = "GENERO", default, deserialize_with = "lenient_string")]
    pub genero: String,
    #[serde(rename = "DEPARTAMENTO", default, deserialize_with = "lenient_string")]
    pub departamento: String,
    #[serde(rename = "FECHA_DESPIDO", default)]
    pub fecha_despido: Option<String>,
}

impl Resource for Empleado {
    const PATH: &'static str = "empleados";
    const COLLECTION_KEY: &'static str = "empleados";

    fn id(&self) -> Option<i64> {
        self.id_empleado
    }
}

impl CrudResource for Empleado {
    const RECORD_KEY: &'static str = "empleado";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Empleados obtenidos con éxito"),
        fetch_failed: "Error al obtener los empleados",
        created: "Empleado creado con éxito",
        create_failed: "Error al crear el empleado",
        updated: "Empleado editado con éxito",
        update_failed: "Error al editar el empleado",
        deleted: "Empleado eliminado con éxito",
        delete_failed: "Error al eliminar el empleado",
        empty_list: "No hay empleados registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_empleado = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmpleadoDraft {
    pub id_usuario: String,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub cui: String,
    pub nit: String,
    pub rol_administrativo: String,
    pub fecha_contrato: String,
    pub estado: String,
    pub turno: String,
    pub salario: String,
    pub genero: String,
    pub departamento: String,
    pub fecha_despido: String,
}

fn text_or_null(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl Draft<Empleado> for EmpleadoDraft {
    fn from_record(record: &Empleado) -> Self {
        Self {
            id_usuario: js_num::int_field(record.id_usuario),
            nombre: record.nombre.clone(),
            apellido: record.apellido.clone(),
            correo: record.correo.clone(),
            telefono: record.telefono.clone(),
            cui: record.cui.clone(),
            nit: record.nit.clone(),
            rol_administrativo: record.rol_administrativo.clone(),
            fecha_contrato: record.fecha_contrato.clone().unwrap_or_default(),
            estado: record.estado.clone(),
            turno: record.turno.clone(),
            salario: js_num::float_field(record.salario),
            genero: record.genero.clone(),
            departamento: record.departamento.clone(),
            fecha_despido: record.fecha_despido.clone().unwrap_or_default(),
        }
    }

    fn to_record(&self) -> Empleado {
        Empleado {
            id_empleado: None,
            id_usuario: js_num::int_or_null(&self.id_usuario),
            cui: self.cui.clone(),
            nit: self.nit.clone(),
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            correo: self.correo.clone(),
            telefono: self.telefono.clone(),
            rol_administrativo: self.rol_administrativo.clone(),
            fecha_contrato: text_or_null(&self.fecha_contrato),
            estado: self.estado.clone(),
            turno: self.turno.clone(),
            salario: js_num::float_or_null(&self.salario),
            genero: self.genero.clone(),
            departamento: self.departamento.clone(),
            fecha_despido: text_or_null(&self.fecha_despido),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Draft;

    #[test]
    fn optional_dates_and_salary_default_to_null() {
        let body = EmpleadoDraft::default().create_body();
        assert_eq!(body["FECHA_CONTRATO"], serde_json::Value::Null);
        assert_eq!(body["FECHA_DESPIDO"], serde_json::Value::Null);
        assert_eq!(body["SALARIO"], serde_json::Value::Null);
        assert_eq!(body["ID_USUARIO"], serde_json::Value::Null);
    }

    #[test]
    fn filled_fields_keep_their_wire_names() {
        let draft = EmpleadoDraft {
            id_usuario: "2".into(),
            nombre: "Mario".into(),
            rol_administrativo: "Gerente".into(),
            fecha_contrato: "2023-05-01".into(),
            salario: "4500.50".into(),
            ..Default::default()
        };
        let body = draft.create_body();
        assert_eq!(body["ID_USUARIO"], 2);
        assert_eq!(body["ROL_ADMINISTRATIVO"], "Gerente");
        assert_eq!(body["FECHA_CONTRATO"], "2023-05-01");
        assert_eq!(body["SALARIO"], 4500.5);
        assert!(body.get("ID_EMPLEADO").is_none());
    }
}
