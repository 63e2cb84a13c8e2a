mod form;
mod list;

pub use form::DetalleFacturaForm;
pub use list::DetalleFacturaList;

use contracts::domain::a007_detalle_factura::{DetalleFactura, DetalleFacturaDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

/// Pantalla de líneas de facturación; es la que abre la entrada
/// "Facturación" del menú.
#[component]
pub fn DetallesFacturacionPage() -> impl IntoView {
    let vm = CrudVm::<DetalleFactura, DetalleFacturaDraft>::new();
    vm.load();

    view! {
        <div>
            <DetalleFacturaForm vm=vm />
            <DetalleFacturaList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
