mod form;
mod list;

pub use form::RestauranteForm;
pub use list::RestauranteList;

use contracts::domain::a010_restaurante::{Restaurante, RestauranteDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn RestaurantesPage() -> impl IntoView {
    let vm = CrudVm::<Restaurante, RestauranteDraft>::new();
    vm.load();

    view! {
        <div>
            <RestauranteForm vm=vm />
            <RestauranteList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
