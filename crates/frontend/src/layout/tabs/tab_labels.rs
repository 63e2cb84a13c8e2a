/// Tab title for a screen key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_resumen" => "Home",
        "a001_usuarios" => "Usuarios",
        "a002_clientes" => "Clientes",
        "a003_reservaciones" => "Reservaciones",
        "a004_habitaciones" => "Habitaciones",
        "a005_servicios" => "Servicios",
        "a007_facturacion" => "Facturación",
        "a008_pagos" => "Pagos",
        "a009_pedidos" => "Pedidos",
        "a010_restaurante" => "Restaurante",
        "a011_reportes" => "Reportes",
        "a012_empleados" => "Empleados",
        _ => "Pantalla",
    }
}
