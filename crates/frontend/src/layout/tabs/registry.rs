//! Tab content registry: the single place mapping a tab key to its screen.

use crate::dashboards::d100_resumen::ui::ResumenDashboard;
use crate::domain::a001_usuario::ui::UsuariosPage;
use crate::domain::a002_cliente::ui::ClientesPage;
use crate::domain::a003_reservacion::ui::ReservacionesPage;
use crate::domain::a004_habitacion::ui::HabitacionesPage;
use crate::domain::a005_servicio::ui::ServiciosPage;
use crate::domain::a007_detalle_factura::ui::DetallesFacturacionPage;
use crate::domain::a008_pago::ui::PagosPage;
use crate::domain::a009_pedido::ui::PedidosPage;
use crate::domain::a010_restaurante::ui::RestaurantesPage;
use crate::domain::a011_reporte::ui::ReportesPage;
use crate::domain::a012_empleado::ui::EmpleadosPage;
use leptos::prelude::*;

/// Renders the content for a tab key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_resumen" => view! { <ResumenDashboard /> }.into_any(),
        "a001_usuarios" => view! { <UsuariosPage /> }.into_any(),
        "a002_clientes" => view! { <ClientesPage /> }.into_any(),
        "a003_reservaciones" => view! { <ReservacionesPage /> }.into_any(),
        "a004_habitaciones" => view! { <HabitacionesPage /> }.into_any(),
        "a005_servicios" => view! { <ServiciosPage /> }.into_any(),
        // la entrada de facturación abre la pantalla de detalles; las
        // facturas en sí no tienen pantalla propia
        "a007_facturacion" => view! { <DetallesFacturacionPage /> }.into_any(),
        "a008_pagos" => view! { <PagosPage /> }.into_any(),
        "a009_pedidos" => view! { <PedidosPage /> }.into_any(),
        "a010_restaurante" => view! { <RestaurantesPage /> }.into_any(),
        "a011_reportes" => view! { <ReportesPage /> }.into_any(),
        "a012_empleados" => view! { <EmpleadosPage /> }.into_any(),
        unknown => view! {
            <div class="container my-4">
                <p>{format!("Pantalla desconocida: {unknown}")}</p>
            </div>
        }
        .into_any(),
    }
}
