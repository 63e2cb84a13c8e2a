use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Reporte interno generado por un empleado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reporte {
    #[serde(rename = "ID_REPORTE", default, skip_serializing_if = "Option::is_none")]
    pub id_reporte: Option<i64>,
    #[serde(rename = "ID_EMPLEADO", default)]
    pub id_empleado: Option<i64>,
    #[serde(rename = "DEPARTAMENTO", default, deserialize_with = "lenient_string")]
    pub departamento: String,
    #[serde(rename = "FECHA_GENERADO", default, deserialize_with = "lenient_string")]
    pub fecha_generado: String,
    #[serde(rename = "DETALLE", default, deserialize_with = "lenient_string")]
    pub detalle: String,
}

impl Resource for Reporte {
    const PATH: &'static str = "reportes";
    const COLLECTION_KEY: &'static str = "reportes";

    fn id(&self) -> Option<i64> {
        self.id_reporte
    }
}

impl CrudResource for Reporte {
    const RECORD_KEY: &'static str = "reporte";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Reportes obtenidos con éxito"),
        fetch_failed: "Error al obtener los reportes",
        created: "Reporte creado con éxito",
        create_failed: "Error al procesar el reporte",
        updated: "Reporte actualizado con éxito",
        update_failed: "Error al editar el reporte",
        deleted: "Reporte eliminado con éxito",
        delete_failed: "Error al eliminar el reporte",
        empty_list: "No hay reportes registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_reporte = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReporteDraft {
    pub id_empleado: String,
    pub departamento: String,
    pub fecha_generado: String,
    pub detalle: String,
}

impl Draft<Reporte> for ReporteDraft {
    fn from_record(record: &Reporte) -> Self {
        Self {
            id_empleado: js_num::int_field(record.id_empleado),
            departamento: record.departamento.clone(),
            fecha_generado: record.fecha_generado.clone(),
            detalle: record.detalle.clone(),
        }
    }

    fn to_record(&self) -> Reporte {
        Reporte {
            id_reporte: None,
            id_empleado: js_num::int_or_null(&self.id_empleado),
            departamento: self.departamento.clone(),
            fecha_generado: self.fecha_generado.clone(),
            detalle: self.detalle.clone(),
        }
    }
}
