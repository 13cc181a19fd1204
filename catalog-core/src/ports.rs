mod product;
mod repository;

pub use product::ProductService;
pub use repository::Repository;

use std::fmt::Display;

/// A persisted business object with an identifier.
///
/// The identifier is the entity's primary key: at most one stored entity of a
/// given type carries any particular id.
pub trait Entity: Send + Sync + Unpin + Sized + 'static {
    /// The primary key type
    type Id: Copy + PartialEq + Display + Send + Sync + Unpin + 'static;

    /// A short, human-readable name for the entity type, used in errors and logs
    const NAME: &'static str;

    /// The primary key of this entity
    fn id(&self) -> Self::Id;
}
