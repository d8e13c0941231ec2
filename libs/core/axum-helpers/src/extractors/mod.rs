//! Custom extractors that answer with the standard error body.

pub mod int_path;
pub mod validated_json;

pub use int_path::U32Path;
pub use validated_json::ValidatedJson;
