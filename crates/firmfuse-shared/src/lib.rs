//! Shared types and pure fusion primitives for firmfuse.
//!
//! Nothing in this crate performs I/O: the field model, record types,
//! validity predicate, multi-value combiner and industry vocabulary all live
//! here so the daemon and its tests agree on one definition.

pub mod combine;
pub mod error;
pub mod field;
pub mod industry;
pub mod record;
pub mod research;
pub mod validity;

pub use combine::combine;
pub use error::FirmfuseError;
pub use field::{Field, FieldKind};
pub use industry::{is_industry, DEFAULT_INDUSTRY, INDUSTRY_TYPES};
pub use record::{FieldValue, FusedRecord, RawSourceRecord, SENTINEL};
pub use research::{
    split_field, BatchResponse, CompanyResearch, ErrorResponse, ResearchOverrides, ResearchReply,
    ResearchRequestBody, ResearchStatus,
};
pub use validity::{is_invalid, is_invalid_text, is_sentinel, usable_value};
