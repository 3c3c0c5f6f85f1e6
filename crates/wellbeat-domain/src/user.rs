//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format in the store: `i16` (0 = Collaborator, 1 = Manager).
/// JSON format: the variant name (`"Collaborator"` / `"Manager"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Collaborator = 0,
    Manager = 1,
}

impl UserRole {
    /// Convert from the stored `i16` value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Collaborator),
            1 => Some(Self::Manager),
            _ => None,
        }
    }

    /// Stored `i16` value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Parse a role name, case-insensitively. Returns `None` for anything
    /// other than "collaborator" or "manager".
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "collaborator" => Some(Self::Collaborator),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Collaborator => "Collaborator",
            Self::Manager => "Manager",
        }
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_i16().cmp(&other.as_i16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_i16_to_role() {
        assert_eq!(UserRole::from_i16(0), Some(UserRole::Collaborator));
        assert_eq!(UserRole::from_i16(1), Some(UserRole::Manager));
        assert_eq!(UserRole::from_i16(2), None);
    }

    #[test]
    fn should_parse_role_names_case_insensitively() {
        assert_eq!(UserRole::parse_name("Manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::parse_name("manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::parse_name("COLLABORATOR"), Some(UserRole::Collaborator));
        assert_eq!(UserRole::parse_name(" collaborator "), Some(UserRole::Collaborator));
        assert_eq!(UserRole::parse_name("admin"), None);
        assert_eq!(UserRole::parse_name(""), None);
    }

    #[test]
    fn should_order_roles_by_privilege_level() {
        assert!(UserRole::Collaborator < UserRole::Manager);
    }

    #[test]
    fn should_serialize_role_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&UserRole::Manager).unwrap(),
            "\"Manager\""
        );
        let parsed: UserRole = serde_json::from_str("\"Collaborator\"").unwrap();
        assert_eq!(parsed, UserRole::Collaborator);
    }
}
