use leptos::prelude::*;

use crate::shared::crud::Banner;

/// Success/error banner under a form or a list. Renders nothing while no
/// action has completed.
#[component]
pub fn BannerAlert(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            view! {
                <div class=b.alert_class() role="alert">
                    {b.text.clone()}
                </div>
            }
        })
    }
}
