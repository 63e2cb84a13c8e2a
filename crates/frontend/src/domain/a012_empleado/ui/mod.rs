mod form;
mod list;

pub use form::EmpleadoForm;
pub use list::EmpleadoList;

use contracts::domain::a012_empleado::{Empleado, EmpleadoDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn EmpleadosPage() -> impl IntoView {
    let vm = CrudVm::<Empleado, EmpleadoDraft>::new();
    vm.load();

    view! {
        <div>
            <EmpleadoForm vm=vm />
            <EmpleadoList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
