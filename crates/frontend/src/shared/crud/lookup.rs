use contracts::domain::common::Resource;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

/// One-shot fetch of a foreign collection for a form dropdown. A failure
/// only logs and leaves the options empty; the screen's own banner is not
/// touched.
pub fn use_lookup<R: Resource>() -> RwSignal<Vec<R>> {
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        match api::fetch_all::<R>().await {
            Ok(records) => items.set(records),
            Err(err) => log::error!("Error al obtener {}: {:?}", R::PATH, err),
        }
    });
    items
}
