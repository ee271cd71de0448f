//! Label diff engine.

use labelord_models::{LabelOperation, LabelSet, SyncMode};

/// Compute the operations turning `current` into `desired`.
///
/// Adds come first, then updates, then deletes (replace mode only), each in
/// key order. The three groups never share a key.
pub fn compute_label_operations(
    current: &LabelSet,
    desired: &LabelSet,
    mode: SyncMode,
) -> Vec<LabelOperation> {
    let adds = desired
        .iter()
        .filter(|label| !current.contains(label.name()))
        .map(|label| LabelOperation::Add(label.clone()));

    let updates = desired.iter().filter_map(|label| {
        current
            .get(label.name())
            .filter(|existing| !existing.has_same_color(label))
            .map(|existing| LabelOperation::Update {
                old_name: existing.name().to_string(),
                label: label.clone(),
            })
    });

    let deletes = current
        .iter()
        .filter(|label| mode == SyncMode::Replace && !desired.contains(label.name()))
        .map(|label| LabelOperation::Delete(label.clone()));

    adds.chain(updates).chain(deletes).collect()
}
