use contracts::domain::a006_factura::Factura;
use contracts::shared::fecha;
use contracts::shared::js_num::fmt_float;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::charts::{BarChart, DoughnutChart, LineChart};
use crate::shared::components::{BannerAlert, StatCard};
use crate::shared::crud::{api as crud_api, ApiError, Banner};

/// Tablero de resumen: contadores, gráficas y transacciones recientes.
///
/// Las ocho consultas se hacen en serie al montar; cualquier fallo
/// abandona la carga completa y deja el aviso de error.
#[component]
pub fn ResumenDashboard() -> impl IntoView {
    let clientes_count = RwSignal::new(0_i64);
    let reservas_activas = RwSignal::new(0_i64);
    let habitaciones_disponibles = RwSignal::new(0_i64);
    let empleados_count = RwSignal::new(0_i64);
    let facturas_pendientes = RwSignal::new(0_i64);
    let ingresos_mensuales = RwSignal::new(Vec::<(String, f64)>::new());
    let facturas = RwSignal::new(Vec::<Factura>::new());
    let reservas_por_estado = RwSignal::new(Vec::<(String, f64)>::new());
    let banner = RwSignal::new(None::<Banner>);

    spawn_local(async move {
        let cargado = async {
            clientes_count.set(api::conteo("/clientes/count").await?);
            reservas_activas.set(api::conteo("/reservaciones/activas").await?);
            habitaciones_disponibles.set(api::conteo("/habitaciones/disponibles").await?);
            empleados_count.set(api::conteo("/empleados/count").await?);
            facturas_pendientes.set(api::conteo("/facturacion/pendientes").await?);

            let ingresos = api::ingreso_mensual().await?;
            ingresos_mensuales.set(
                ingresos
                    .into_iter()
                    .map(|i| (fecha::mes_label(&i.mes), i.total_ingresos))
                    .collect(),
            );

            facturas.set(crud_api::fetch_all::<Factura>().await?);

            let estados = api::reservaciones_por_estado().await?;
            reservas_por_estado.set(
                estados
                    .into_iter()
                    .map(|e| (e.estado_cancelacion, e.cantidad as f64))
                    .collect(),
            );
            Ok::<(), ApiError>(())
        }
        .await;

        if let Err(err) = cargado {
            log::error!("Error fetching data: {:?}", err);
            banner.set(Some(Banner::error("Error al obtener datos")));
        }
    });

    // la serie de pagadas se aproxima como clientes - pendientes
    let distribucion = Signal::derive(move || {
        vec![
            (
                "Facturas Pendientes".to_string(),
                facturas_pendientes.get() as f64,
            ),
            (
                "Facturas Pagadas".to_string(),
                (clientes_count.get() - facturas_pendientes.get()) as f64,
            ),
        ]
    });

    let recientes = Signal::derive(move || facturas.get().into_iter().take(5).collect::<Vec<_>>());

    view! {
        <div class="container my-4">
            <h2 class="text-center">"Dashboard - Resumen General"</h2>

            <div class="row mt-3">
                <StatCard title="Clientes Registrados" value=clientes_count />
                <StatCard title="Reservas Activas" value=reservas_activas />
                <StatCard title="Habitaciones Disponibles" value=habitaciones_disponibles />
                <StatCard title="Empleados Activos" value=empleados_count />
                <StatCard
                    title="Facturas Pendientes"
                    value=facturas_pendientes
                    alert=Signal::derive(move || facturas_pendientes.get() > 10)
                />
            </div>

            <div class="row mt-5">
                <div class="col-md-6 mb-4">
                    <h4 class="text-center">"Ingresos Mensuales"</h4>
                    <LineChart series=ingresos_mensuales />
                </div>
                <div class="col-md-6 mb-4">
                    <h4 class="text-center">"Distribución de Facturas"</h4>
                    <DoughnutChart slices=distribucion />
                </div>
            </div>

            <div class="row mt-5">
                <div class="col-md-6 mx-auto">
                    <h4 class="text-center">"Reservaciones por Estado"</h4>
                    <BarChart series=reservas_por_estado />
                </div>
            </div>

            <div class="mt-5">
                <h4 class="text-center">"Transacciones Recientes"</h4>
                <table class="table table-striped table-bordered table-hover">
                    <thead>
                        <tr>
                            <th>"Fecha de Emisión"</th>
                            <th>"Cliente"</th>
                            <th>"Monto Total"</th>
                            <th>"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            recientes
                                .get()
                                .into_iter()
                                .map(|factura| {
                                    view! {
                                        <tr>
                                            <td>{fecha::fecha_corta(&factura.fecha_emision)}</td>
                                            <td>
                                                {factura
                                                    .nombre_cliente
                                                    .unwrap_or_else(|| "N/A".to_string())}
                                            </td>
                                            <td>
                                                {factura.total.map(fmt_float).unwrap_or_default()}
                                            </td>
                                            <td>{factura.estado}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <BannerAlert banner=banner />
        </div>
    }
}
