mod form;
mod list;

pub use form::UsuarioForm;
pub use list::UsuarioList;

use contracts::domain::a001_usuario::{Usuario, UsuarioDraft};
use leptos::prelude::*;

use crate::shared::components::BannerAlert;
use crate::shared::crud::CrudVm;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let vm = CrudVm::<Usuario, UsuarioDraft>::new();
    vm.load();

    view! {
        <div>
            <UsuarioForm vm=vm />
            <UsuarioList vm=vm />
            <BannerAlert banner=vm.page_banner />
        </div>
    }
}
