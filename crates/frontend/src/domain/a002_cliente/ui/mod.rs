mod form;
mod list;

pub use form::ClienteForm;
pub use list::ClienteList;

use contracts::domain::a002_cliente::{Cliente, ClienteDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

/// Pantalla de clientes: formulario de alta/edición arriba, lista abajo.
#[component]
pub fn ClientesPage() -> impl IntoView {
    let vm = CrudVm::<Cliente, ClienteDraft>::new();
    vm.load();

    view! {
        <div>
            <ClienteForm vm=vm />
            <ClienteList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
