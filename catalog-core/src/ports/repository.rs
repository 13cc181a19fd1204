use super::Entity;

/// Generic persistence operations for a single entity type.
///
/// A repository is bound to some database context owned by the adapter.
/// Writes (`insert`, `update` and the `delete` family) are staged in that
/// context and only become durable once the adapter commits it; how that
/// happens is up to the implementation.
///
/// Predicates are plain closures evaluated against fetched entities, so any
/// Rust expression over the entity's fields can be used to filter.
pub trait Repository<E: Entity> {
    /// The error type for storage failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every stored entity.
    ///
    /// No ordering is guaranteed.
    fn get_all(&mut self) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send;

    /// Fetch the entity with the given primary key.
    ///
    /// # Returns
    ///
    /// Ok(None) if no entity has that key.
    fn get_by_id(
        &mut self,
        id: E::Id,
    ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send;

    /// Fetch every entity for which `predicate` holds.
    fn get_many<P>(
        &mut self,
        predicate: P,
    ) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send
    where
        P: Fn(&E) -> bool + Send;

    /// Fetch the first entity for which `predicate` holds, if any.
    fn get_one<P>(
        &mut self,
        predicate: P,
    ) -> impl Future<Output = Result<Option<E>, Self::Error>> + Send
    where
        P: Fn(&E) -> bool + Send;

    /// Fetch the only entity for which `predicate` holds.
    ///
    /// # Errors
    ///
    /// Fails if no entity matches, or if more than one does.
    fn get_single<P>(
        &mut self,
        predicate: P,
    ) -> impl Future<Output = Result<E, Self::Error>> + Send
    where
        P: Fn(&E) -> bool + Send;

    /// Fetch the first entity for which `predicate` holds.
    ///
    /// # Errors
    ///
    /// Fails if no entity matches.
    fn get_first<P>(
        &mut self,
        predicate: P,
    ) -> impl Future<Output = Result<E, Self::Error>> + Send
    where
        P: Fn(&E) -> bool + Send;

    /// Stage a new entity for insertion.
    ///
    /// The entity's own id is ignored; the store assigns one.
    ///
    /// # Returns
    ///
    /// The primary key assigned by the store.
    fn insert(&mut self, entity: &E) -> impl Future<Output = Result<E::Id, Self::Error>> + Send;

    /// Replace every stored value of the entity with the given primary key.
    ///
    /// # Returns
    ///
    /// Ok(false) if no entity has that key.
    fn update(&mut self, entity: &E) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Remove the entity with the given primary key.
    ///
    /// # Returns
    ///
    /// Ok(false) if no entity has that key.
    fn delete_by_id(&mut self, id: E::Id) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Remove the stored counterpart of `entity`, matched by primary key.
    fn delete(&mut self, entity: &E) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        self.delete_by_id(entity.id())
    }

    /// Bulk delete: remove *every* entity for which `predicate` holds.
    ///
    /// # Returns
    ///
    /// The number of entities removed.
    fn delete_where<P>(
        &mut self,
        predicate: P,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send
    where
        P: Fn(&E) -> bool + Send;

    /// Check whether an entity with the given primary key is stored.
    fn exists(&mut self, id: E::Id) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
