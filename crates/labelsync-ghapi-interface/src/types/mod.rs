mod label;

pub use label::GhLabel;
