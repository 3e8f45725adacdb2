//! Main field resolution for relation targets

use meta_schema::{DEFAULT_ID_ATTRIBUTE, Schema};

/// Pick the attribute of `target` used to display a relation to it.
///
/// The first `string` attribute in declaration order wins, falling back to
/// the target's identity attribute. An unresolved target yields `"id"`.
pub fn default_main_field(target: Option<&Schema>) -> String {
    let Some(target) = target else {
        return DEFAULT_ID_ATTRIBUTE.to_string();
    };

    target
        .attributes
        .iter()
        .find(|(_, definition)| definition.is_string())
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| target.id_attribute().to_string())
}
