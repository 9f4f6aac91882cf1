use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::cart::CartLine;
use crate::domain::errors::DomainError;
use crate::domain::ports::CartRepository;

/// Process-local cart storage, used for tests and local runs without Postgres.
///
/// All operations take the same lock, so read-modify-write on a line is atomic.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    lines: Mutex<Vec<CartLine>>,
}

impl InMemoryCartRepository {
    fn lines(&self) -> Result<MutexGuard<'_, Vec<CartLine>>, DomainError> {
        self.lines
            .lock()
            .map_err(|_| DomainError::Internal("cart store lock poisoned".to_string()))
    }
}

fn bump(line: &mut CartLine, quantity: i32) -> Result<(), DomainError> {
    line.quantity = line
        .quantity
        .checked_add(quantity)
        .ok_or_else(|| DomainError::Internal("cart quantity overflow".to_string()))?;
    line.updated_at = Utc::now();
    Ok(())
}

impl CartRepository for InMemoryCartRepository {
    fn upsert_line(
        &self,
        customer_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<CartLine, DomainError> {
        let mut lines = self.lines()?;
        if let Some(line) = lines
            .iter_mut()
            .find(|l| l.customer_id == customer_id && l.product_id == product_id)
        {
            bump(line, quantity)?;
            return Ok(line.clone());
        }

        let now = Utc::now();
        let line = CartLine {
            cart_item_id: Uuid::new_v4(),
            customer_id: customer_id.to_string(),
            product_id: product_id.to_string(),
            quantity,
            created_at: now,
            updated_at: now,
        };
        lines.push(line.clone());
        Ok(line)
    }

    fn increment_line(
        &self,
        customer_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<Option<CartLine>, DomainError> {
        let mut lines = self.lines()?;
        match lines
            .iter_mut()
            .find(|l| l.customer_id == customer_id && l.product_id == product_id)
        {
            Some(line) => {
                bump(line, quantity)?;
                Ok(Some(line.clone()))
            }
            None => Ok(None),
        }
    }

    fn find_by_customer(&self, customer_id: &str) -> Result<Vec<CartLine>, DomainError> {
        Ok(self
            .lines()?
            .iter()
            .filter(|l| l.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn delete_line(&self, customer_id: &str, cart_item_id: Uuid) -> Result<usize, DomainError> {
        let mut lines = self.lines()?;
        let before = lines.len();
        lines.retain(|l| !(l.customer_id == customer_id && l.cart_item_id == cart_item_id));
        Ok(before - lines.len())
    }

    fn list_all(&self) -> Result<Vec<CartLine>, DomainError> {
        Ok(self.lines()?.clone())
    }
}
