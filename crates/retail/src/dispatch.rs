//! Priority-ordered role dispatch for the admin dashboards.
//!
//! A principal may hold several roles; the landing dashboard is decided by
//! an explicit ordered table evaluated first-match-wins, with a login
//! redirect when none match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use retail_core::RetailError;

/// Administrative roles recognized by the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Inventory management.
    InventoryManager,
    /// Marketing management.
    MarketingManager,
    /// Sales management.
    SalesManager,
}

impl Role {
    /// Returns the upstream role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::InventoryManager => "INVENTORY_MANAGER",
            Self::MarketingManager => "MARKETING_MANAGER",
            Self::SalesManager => "SALES_MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "INVENTORY_MANAGER" => Ok(Self::InventoryManager),
            "MARKETING_MANAGER" => Ok(Self::MarketingManager),
            "SALES_MANAGER" => Ok(Self::SalesManager),
            other => Err(RetailError::InvalidParameter(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

/// Dashboard destinations, checked in fixed priority order.
pub const ROLE_DASHBOARDS: [(Role, &str); 4] = [
    (Role::Admin, "/admin/dashboard"),
    (Role::InventoryManager, "/inventory/dashboard"),
    (Role::MarketingManager, "/marketing/dashboard"),
    (Role::SalesManager, "/sales/dashboard"),
];

/// Destination used when the principal holds none of the known roles.
pub const LOGIN_REDIRECT: &str = "/login";

/// Destination for a principal's granted role set, first match wins.
#[must_use]
pub fn dashboard_for(granted: &[Role]) -> &'static str {
    ROLE_DASHBOARDS
        .iter()
        .find(|(role, _)| granted.contains(role))
        .map_or(LOGIN_REDIRECT, |&(_, destination)| destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_lands_on_its_dashboard() {
        assert_eq!(dashboard_for(&[Role::Admin]), "/admin/dashboard");
        assert_eq!(
            dashboard_for(&[Role::InventoryManager]),
            "/inventory/dashboard"
        );
        assert_eq!(
            dashboard_for(&[Role::MarketingManager]),
            "/marketing/dashboard"
        );
        assert_eq!(dashboard_for(&[Role::SalesManager]), "/sales/dashboard");
    }

    #[test]
    fn admin_wins_regardless_of_grant_order() {
        let granted = [Role::SalesManager, Role::Admin, Role::MarketingManager];
        assert_eq!(dashboard_for(&granted), "/admin/dashboard");
    }

    #[test]
    fn priority_follows_the_table_not_the_grant_list() {
        let granted = [Role::SalesManager, Role::InventoryManager];
        assert_eq!(dashboard_for(&granted), "/inventory/dashboard");
    }

    #[test]
    fn no_known_role_falls_back_to_login() {
        assert_eq!(dashboard_for(&[]), LOGIN_REDIRECT);
    }

    #[test]
    fn role_names_round_trip() {
        for (role, _) in ROLE_DASHBOARDS {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("SUPERVISOR".parse::<Role>().is_err());
    }
}
