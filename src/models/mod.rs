pub mod document;
pub mod v1;
pub mod v2;

pub use document::VersionedDocument;
