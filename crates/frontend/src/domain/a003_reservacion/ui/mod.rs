mod form;
mod list;

pub use form::ReservacionForm;
pub use list::ReservacionList;

use contracts::domain::a003_reservacion::{Reservacion, ReservacionDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

/// Pantalla de reservaciones. El guardado de una edición es local: ver la
/// política de actualización de `Reservacion`.
#[component]
pub fn ReservacionesPage() -> impl IntoView {
    let vm = CrudVm::<Reservacion, ReservacionDraft>::new();
    vm.load();

    view! {
        <div>
            <ReservacionForm vm=vm />
            <ReservacionList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
