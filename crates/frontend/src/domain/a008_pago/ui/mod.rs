mod form;
mod list;

pub use form::PagoForm;
pub use list::PagoList;

use contracts::domain::a008_pago::{Pago, PagoDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn PagosPage() -> impl IntoView {
    let vm = CrudVm::<Pago, PagoDraft>::new();
    vm.load();

    view! {
        <div>
            <PagoForm vm=vm />
            <PagoList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
