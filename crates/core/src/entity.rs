/// Something looked up by key: a product by barcode, a brand by catalog
/// number, a user by id.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
