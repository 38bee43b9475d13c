//! Tenants

use serde::{Deserialize, Serialize};

use core_kernel::TenantId;

/// A tenant. Identity only; all financial figures live on the tenancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier
    pub id: TenantId,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl Tenant {
    pub fn new(id: TenantId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
