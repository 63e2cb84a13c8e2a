//! The mutation dispatcher binding list, edit mode, form and banners.

use contracts::domain::common::{CrudResource, Draft, Resource, UpdatePolicy};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::banner::{self, Banner};
use super::edit_mode::EditMode;
use super::list_store::ListStore;

/// One screen's CRUD state. Cheap to copy into event closures: every field
/// is an arena-allocated signal.
///
/// Per user action the dispatcher performs zero or one network call, zero
/// or one list mutation and exactly one banner update.
pub struct CrudVm<R: CrudResource, D: Draft<R>> {
    pub list: RwSignal<ListStore<R>>,
    pub edit: RwSignal<EditMode<R>>,
    pub form: RwSignal<D>,
    /// Outcomes of creation, shown under the form.
    pub form_banner: RwSignal<Option<Banner>>,
    /// Outcomes of load/update/delete, shown under the list.
    pub page_banner: RwSignal<Option<Banner>>,
}

impl<R: CrudResource, D: Draft<R>> Clone for CrudVm<R, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudResource, D: Draft<R>> Copy for CrudVm<R, D> {}

impl<R: CrudResource, D: Draft<R>> Default for CrudVm<R, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CrudResource, D: Draft<R>> CrudVm<R, D> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ListStore::new()),
            edit: RwSignal::new(EditMode::Creating),
            form: RwSignal::new(D::default()),
            form_banner: RwSignal::new(None),
            page_banner: RwSignal::new(None),
        }
    }

    /// One-shot collection load, called once per screen activation. On
    /// failure the list keeps its previous contents (empty on first load).
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_all::<R>().await {
                Ok(records) => {
                    vm.list.update(|l| l.replace_all(records));
                    if let Some(text) = R::MESSAGES.fetched {
                        vm.page_banner.set(Some(Banner::success(text)));
                    }
                }
                Err(err) => vm
                    .page_banner
                    .set(Some(banner::fetch_error(&err, &R::MESSAGES))),
            }
        });
    }

    /// Form submit: create when no record is held, save the edit otherwise.
    pub fn submit(&self) {
        let draft = self.form.get_untracked();
        match self.edit.get_untracked() {
            EditMode::Creating => self.create(draft),
            EditMode::Editing(prior) => self.save_edit(draft, prior),
        }
    }

    fn create(&self, draft: D) {
        let vm = *self;
        spawn_local(async move {
            match api::create::<R>(&draft.create_body()).await {
                Ok(record) => {
                    vm.list.update(|l| l.append(record));
                    vm.form.set(D::default());
                    vm.form_banner
                        .set(Some(Banner::success(R::MESSAGES.created)));
                }
                Err(err) => {
                    // the form keeps its values for correction
                    vm.form_banner
                        .set(Some(banner::create_error(&err, &R::MESSAGES)));
                }
            }
        });
    }

    fn save_edit(&self, draft: D, prior: R) {
        let vm = *self;
        let merged = draft.merged_record(&prior);
        let Some(id) = merged.id() else {
            return;
        };
        match R::UPDATE_POLICY {
            UpdatePolicy::LocalOnly => {
                vm.list.update(|l| l.replace_by_id(id, merged));
                vm.finish_edit(R::MESSAGES.updated);
            }
            UpdatePolicy::Remote => {
                spawn_local(async move {
                    match api::update::<R>(id, &merged).await {
                        Ok(server_record) => {
                            let applied = server_record.unwrap_or(merged);
                            vm.list.update(|l| l.replace_by_id(id, applied));
                            vm.finish_edit(R::MESSAGES.updated);
                        }
                        Err(err) => {
                            // edit mode is kept so the operator can retry
                            vm.page_banner
                                .set(Some(banner::update_error(&err, &R::MESSAGES)));
                        }
                    }
                });
            }
        }
    }

    fn finish_edit(&self, message: &'static str) {
        self.edit.set(EditMode::Creating);
        self.form.set(D::default());
        self.page_banner.set(Some(Banner::success(message)));
    }

    pub fn delete(&self, id: i64) {
        let vm = *self;
        spawn_local(async move {
            match api::delete::<R>(id).await {
                Ok(()) => {
                    vm.list.update(|l| l.remove_by_id(id));
                    // the toggle must never hold a record the store lost
                    let editing_deleted = vm
                        .edit
                        .with_untracked(|e| e.record().and_then(|r| r.id()) == Some(id));
                    if editing_deleted {
                        vm.edit.set(EditMode::Creating);
                        vm.form.set(D::default());
                    }
                    vm.page_banner
                        .set(Some(Banner::success(R::MESSAGES.deleted)));
                }
                Err(err) => vm
                    .page_banner
                    .set(Some(banner::delete_error(&err, &R::MESSAGES))),
            }
        });
    }

    /// Row action: hold the record and fill the form from it.
    pub fn begin_edit(&self, record: R) {
        self.form.set(D::from_record(&record));
        self.edit.set(EditMode::Editing(record));
    }

    /// Back to creation mode with a blank form, same state as a fresh
    /// screen.
    pub fn cancel_edit(&self) {
        self.edit.set(EditMode::Creating);
        self.form.set(D::default());
    }
}
