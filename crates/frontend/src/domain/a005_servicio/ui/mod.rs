mod form;
mod list;

pub use form::ServicioForm;
pub use list::ServicioList;

use contracts::domain::a005_servicio::{Servicio, ServicioDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn ServiciosPage() -> impl IntoView {
    let vm = CrudVm::<Servicio, ServicioDraft>::new();
    vm.load();

    view! {
        <div>
            <ServicioForm vm=vm />
            <ServicioList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
