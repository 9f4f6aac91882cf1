use uuid::Uuid;

use super::cart::CartLine;
use super::errors::DomainError;

/// Storage seam for cart lines.
///
/// Each method is one logical operation against the store. Implementations
/// must make `upsert_line` and `increment_line` atomic with respect to other
/// calls on the same (customer, product) pair.
pub trait CartRepository: Send + Sync + 'static {
    /// Create the line or add `quantity` to the existing one.
    fn upsert_line(
        &self,
        customer_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<CartLine, DomainError>;

    /// Add `quantity` to an existing line. `None` when no line matches.
    fn increment_line(
        &self,
        customer_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<Option<CartLine>, DomainError>;

    fn find_by_customer(&self, customer_id: &str) -> Result<Vec<CartLine>, DomainError>;

    /// Returns the number of lines removed.
    fn delete_line(&self, customer_id: &str, cart_item_id: Uuid) -> Result<usize, DomainError>;

    fn list_all(&self) -> Result<Vec<CartLine>, DomainError>;
}
