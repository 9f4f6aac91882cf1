use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (customer, product) entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub cart_item_id: Uuid,
    pub customer_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => f.write_str("customer"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// A verified caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub customer_id: String,
    pub role: Role,
}

impl Identity {
    pub fn new(customer_id: impl Into<String>, role: Role) -> Self {
        Self {
            customer_id: customer_id.into(),
            role,
        }
    }
}

/// What add-to-cart does when the customer has no line for the product yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddPolicy {
    /// Create the line on first add, increment afterwards.
    #[default]
    Upsert,
    /// Only increment existing lines; a miss is rejected.
    ExistingOnly,
}

impl FromStr for AddPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(AddPolicy::Upsert),
            "existing-only" | "existing_only" => Ok(AddPolicy::ExistingOnly),
            other => Err(format!(
                "unknown add policy '{}', expected 'upsert' or 'existing-only'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_policy_parses_known_values() {
        assert_eq!("upsert".parse::<AddPolicy>(), Ok(AddPolicy::Upsert));
        assert_eq!(
            " Existing-Only ".parse::<AddPolicy>(),
            Ok(AddPolicy::ExistingOnly)
        );
        assert_eq!(
            "existing_only".parse::<AddPolicy>(),
            Ok(AddPolicy::ExistingOnly)
        );
    }

    #[test]
    fn add_policy_rejects_unknown_value() {
        assert!("create".parse::<AddPolicy>().is_err());
    }

    #[test]
    fn add_policy_defaults_to_upsert() {
        assert_eq!(AddPolicy::default(), AddPolicy::Upsert);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
        assert_eq!(Role::Customer.to_string(), "customer");
    }
}
