use serde::{Deserialize, Serialize};

use crate::domain::common::{CrudMessages, CrudResource, Draft, Resource, UpdatePolicy};
use crate::shared::js_num;
use crate::shared::serde_ext::lenient_string;

/// Pedido de restaurante cargado a una habitación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(rename = "ID_PEDIDO", default, skip_serializing_if = "Option::is_none")]
    pub id_pedido: Option<i64>,
    #[serde(rename = "ID_HABITACION", default)]
    pub id_habitacion: Option<i64>,
    #[serde(rename = "ID_RESTAURANTE", default)]
    pub id_restaurante: Option<i64>,
    #[serde(rename = "TIPO_PEDIDO", default, deserialize_with = "lenient_string")]
    pub tipo_pedido: String,
    #[serde(rename = "ESTADO", default, deserialize_with = "lenient_string")]
    pub estado: String,
    #[serde(rename = "FECHA_HORA", default, deserialize_with = "lenient_string")]
    pub fecha_hora: String,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub descripcion: String,
    #[serde(rename = "TOTAL", default)]
    pub total: f64,
}

impl Resource for Pedido {
    const PATH: &'static str = "pedidos";
    const COLLECTION_KEY: &'static str = "pedidos";

    fn id(&self) -> Option<i64> {
        self.id_pedido
    }
}

impl CrudResource for Pedido {
    const RECORD_KEY: &'static str = "pedido";
    const UPDATE_POLICY: UpdatePolicy = UpdatePolicy::Remote;
    const MESSAGES: CrudMessages = CrudMessages {
        fetched: Some("Pedidos obtenidos con éxito"),
        fetch_failed: "Error al obtener los pedidos",
        created: "Pedido creado con éxito",
        create_failed: "Error al crear el pedido",
        updated: "Pedido editado con éxito",
        update_failed: "Error al editar el pedido",
        deleted: "Pedido eliminado con éxito",
        delete_failed: "Error al eliminar el pedido",
        empty_list: "No hay pedidos registrados",
    };

    fn set_id(&mut self, id: Option<i64>) {
        self.id_pedido = id;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PedidoDraft {
    pub id_habitacion: String,
    pub id_restaurante: String,
    pub tipo_pedido: String,
    pub estado: String,
    pub fecha_hora: String,
    pub descripcion: String,
    pub total: String,
}

impl Draft<Pedido> for PedidoDraft {
    fn from_record(record: &Pedido) -> Self {
        Self {
            id_habitacion: js_num::int_field(record.id_habitacion),
            id_restaurante: js_num::int_field(record.id_restaurante),
            tipo_pedido: record.tipo_pedido.clone(),
            estado: record.estado.clone(),
            fecha_hora: record.fecha_hora.clone(),
            descripcion: record.descripcion.clone(),
            total: js_num::float_field(Some(record.total)),
        }
    }

    fn to_record(&self) -> Pedido {
        Pedido {
            id_pedido: None,
            id_habitacion: js_num::int_or_null(&self.id_habitacion),
            id_restaurante: js_num::int_or_null(&self.id_restaurante),
            tipo_pedido: self.tipo_pedido.clone(),
            estado: self.estado.clone(),
            // el valor del control viaja tal cual, sin normalizar
            fecha_hora: self.fecha_hora.clone(),
            descripcion: self.descripcion.clone(),
            total: js_num::float_or_zero(&self.total),
        }
    }
}
