pub mod a001_usuario;
pub mod a002_cliente;
pub mod a003_reservacion;
pub mod a004_habitacion;
pub mod a005_servicio;
pub mod a007_detalle_factura;
pub mod a008_pago;
pub mod a009_pedido;
pub mod a010_restaurante;
pub mod a011_reporte;
pub mod a012_empleado;
