mod form;
mod list;

pub use form::PedidoForm;
pub use list::PedidoList;

use contracts::domain::a009_pedido::{Pedido, PedidoDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn PedidosPage() -> impl IntoView {
    let vm = CrudVm::<Pedido, PedidoDraft>::new();
    vm.load();

    view! {
        <div>
            <PedidoForm vm=vm />
            <PedidoList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
