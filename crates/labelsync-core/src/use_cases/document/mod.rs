pub(crate) mod fetch_label_document;
pub(crate) mod flatten_label_document;
pub(crate) mod validate_label_document;

pub use fetch_label_document::FetchLabelDocumentInterface;
pub use flatten_label_document::FlattenLabelDocumentInterface;
pub use validate_label_document::ValidateLabelDocumentInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    fetch_label_document::MockFetchLabelDocumentInterface,
    flatten_label_document::MockFlattenLabelDocumentInterface,
    validate_label_document::MockValidateLabelDocumentInterface,
};
