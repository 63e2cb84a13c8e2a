use serde_json::Value;

use super::resource::CrudResource;

/// Form state for one entity: every field held as the raw text of its input
/// control, coerced only when a payload is built. Mirrors the create/edit
/// forms field-by-field.
pub trait Draft<R: CrudResource>: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Populates the form from a record entering edit mode. Absent values
    /// become empty strings; a control never sees a null.
    fn from_record(record: &R) -> Self;

    /// Builds the record the coerced field values describe. The id is left
    /// unset; `merged_record` supplies it when saving an edit.
    fn to_record(&self) -> R;

    /// JSON body for `POST /{path}/create`. The default serializes
    /// `to_record()`; Usuario overrides this because its create endpoint
    /// takes lowercase keys and a password field that is not part of the
    /// record.
    fn create_body(&self) -> Value {
        serde_json::to_value(self.to_record()).unwrap_or(Value::Null)
    }

    /// Shallow merge of the form over the record being edited: every form
    /// field overrides, the identifier survives.
    fn merged_record(&self, prior: &R) -> R {
        let mut merged = self.to_record();
        merged.set_id(prior.id());
        merged
    }
}
