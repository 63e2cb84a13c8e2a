mod form;
mod list;

pub use form::ReporteForm;
pub use list::ReporteList;

use contracts::domain::a011_reporte::{Reporte, ReporteDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn ReportesPage() -> impl IntoView {
    let vm = CrudVm::<Reporte, ReporteDraft>::new();
    vm.load();

    view! {
        <div>
            <ReporteForm vm=vm />
            <ReporteList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
