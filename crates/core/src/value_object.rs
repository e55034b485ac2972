/// Compared by value: two country records with the same prefix, name and code
/// are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
