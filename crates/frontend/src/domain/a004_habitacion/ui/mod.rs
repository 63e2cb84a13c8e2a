mod form;
mod list;

pub use form::HabitacionForm;
pub use list::HabitacionList;

use contracts::domain::a004_habitacion::{Habitacion, HabitacionDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn HabitacionesPage() -> impl IntoView {
    let vm = CrudVm::<Habitacion, HabitacionDraft>::new();
    vm.load();

    view! {
        <div>
            <HabitacionForm vm=vm />
            <HabitacionList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
