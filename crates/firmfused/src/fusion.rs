//! Field fusion policy.
//!
//! Multi-value fields combine both sources. Scalar fields take the search
//! source, then the network source, when valid. Anything left falls through to
//! the generative fallback.

use crate::fallback::GenerativeFallback;
use firmfuse_shared::{combine, is_invalid_text, usable_value, Field, FieldKind, RawSourceRecord};
use tracing::debug;

#[derive(Clone)]
pub struct FieldFusion {
    fallback: GenerativeFallback,
}

impl FieldFusion {
    pub fn new(fallback: GenerativeFallback) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &GenerativeFallback {
        &self.fallback
    }

    /// Resolve one field from the two sources. Never empty.
    pub async fn fuse(&self, field: Field, search: &RawSourceRecord, network: &RawSourceRecord) -> String {
        if let Some(value) = pick_from_sources(field, search, network) {
            return value;
        }
        debug!(field = %field, "no usable source value, generating");
        self.fallback.generate(field, search, network).await
    }
}

/// The source-derived value for `field`, if either source has a usable one.
///
/// Generative-only fields never take a source value.
pub fn pick_from_sources(
    field: Field,
    search: &RawSourceRecord,
    network: &RawSourceRecord,
) -> Option<String> {
    match field.kind() {
        FieldKind::GenerativeOnly => None,
        FieldKind::MultiValue => combine(search.get(field), network.get(field))
            .filter(|combined| !is_invalid_text(combined, field)),
        FieldKind::Scalar => [search.get(field), network.get(field)]
            .into_iter()
            .flatten()
            .find_map(|value| usable_value(value, field)),
    }
}
