use crate::models::Product;

/// The fixed set of product operations exposed by the catalog.
///
/// Implementations delegate to a [`Repository<Product>`](super::Repository)
/// and commit each write before returning. There are no business rules
/// beyond that.
pub trait ProductService {
    /// The error type for storage failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get a product by its id.
    ///
    /// # Returns
    ///
    /// Ok(None) if the product does not exist.
    fn get_product_by_id(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;

    /// Get every product in the catalog.
    fn get_all_products(&self) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Store a new product.
    ///
    /// # Returns
    ///
    /// The id assigned to the product.
    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<i64, Self::Error>> + Send;

    /// Replace the stored values of a product.
    ///
    /// # Returns
    ///
    /// Ok(false) if the product does not exist.
    fn update_product(
        &self,
        product_id: i64,
        product: Product,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Remove a product.
    ///
    /// # Returns
    ///
    /// Ok(false) if the product does not exist.
    fn delete_product(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
