use std::sync::Arc;

use uuid::Uuid;

use crate::domain::cart::{AddPolicy, CartLine, Identity, Role};
use crate::domain::errors::DomainError;
use crate::domain::ports::CartRepository;

#[derive(Clone)]
pub struct CartService {
    repo: Arc<dyn CartRepository>,
    policy: AddPolicy,
}

impl CartService {
    pub fn new(repo: Arc<dyn CartRepository>, policy: AddPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> AddPolicy {
        self.policy
    }

    /// Add `quantity` of a product to the caller's own cart.
    ///
    /// `requested_customer_id` is the id the client put in the body, if any.
    /// It must match the caller; lines are never written for someone else.
    pub fn add_to_cart(
        &self,
        caller: &Identity,
        requested_customer_id: Option<&str>,
        product_id: &str,
        quantity: i32,
    ) -> Result<CartLine, DomainError> {
        if let Some(requested) = requested_customer_id.filter(|id| !id.is_empty()) {
            if requested != caller.customer_id {
                return Err(DomainError::Forbidden);
            }
        }
        let customer_id = non_empty(&caller.customer_id, "Customer ID")?;
        let product_id = non_empty(product_id, "Product ID")?;
        if quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be a positive integer, got {}",
                quantity
            )));
        }

        let line = match self.policy {
            AddPolicy::Upsert => self.repo.upsert_line(customer_id, product_id, quantity)?,
            AddPolicy::ExistingOnly => self
                .repo
                .increment_line(customer_id, product_id, quantity)?
                .ok_or(DomainError::InvalidOperation)?,
        };

        log::info!(
            "cart line {} for customer {} product {} now has quantity {}",
            line.cart_item_id,
            line.customer_id,
            line.product_id,
            line.quantity
        );
        Ok(line)
    }

    /// Lines of the target customer: the caller itself, or for admins the
    /// customer they asked for.
    pub fn get_cart(
        &self,
        caller: &Identity,
        requested_customer_id: Option<&str>,
    ) -> Result<Vec<CartLine>, DomainError> {
        let target = match caller.role {
            Role::Admin => requested_customer_id.unwrap_or_default(),
            Role::Customer => caller.customer_id.as_str(),
        };
        let target = non_empty(target, "Customer ID")?;
        log::debug!("loading cart of customer {} for {}", target, caller.role);
        self.repo.find_by_customer(target)
    }

    pub fn delete_from_cart(&self, caller: &Identity, cart_item_id: Uuid) -> Result<(), DomainError> {
        let customer_id = non_empty(&caller.customer_id, "Customer ID")?;
        match self.repo.delete_line(customer_id, cart_item_id)? {
            0 => Err(DomainError::NotFound),
            removed => {
                if removed > 1 {
                    log::warn!(
                        "deleting cart item {} of customer {} removed {} lines",
                        cart_item_id,
                        customer_id,
                        removed
                    );
                }
                Ok(())
            }
        }
    }

    pub fn list_all_carts(&self) -> Result<Vec<CartLine>, DomainError> {
        self.repo.list_all()
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        Err(DomainError::MissingParameter(field))
    } else {
        Ok(value)
    }
}
