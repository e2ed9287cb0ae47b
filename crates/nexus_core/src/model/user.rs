//! Session user model.
//!
//! # Invariants
//! - `role` is chosen at sign-in/sign-up and never changed by partial updates.

use super::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Portal role a user signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Educator,
    Admin,
}

impl UserRole {
    /// Stable display string, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Educator => "Educator",
            Self::Admin => "Admin",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative sub-role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminType {
    Official,
    Warden,
}

/// Currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_type: Option<AdminType>,
    /// Data URI or remote URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            admin_type: None,
            profile_picture: None,
        }
    }

    /// Merges the set fields of `patch` into this user.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(admin_type) = patch.admin_type {
            self.admin_type = Some(admin_type);
        }
        if let Some(picture) = patch.profile_picture {
            self.profile_picture = picture;
        }
    }
}

/// Partial profile update. Role is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin_type: Option<AdminType>,
    /// `Some(None)` clears the picture; `None` leaves it unchanged.
    pub profile_picture: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::{AdminType, User, UserPatch, UserRole};

    #[test]
    fn apply_merges_only_set_fields() {
        let mut user = User::new("u1", "Asha", "asha@campus.edu", UserRole::Admin);
        user.apply(UserPatch {
            name: Some("Asha K".to_string()),
            admin_type: Some(AdminType::Warden),
            ..UserPatch::default()
        });

        assert_eq!(user.name, "Asha K");
        assert_eq!(user.email, "asha@campus.edu");

        assert_eq!(user.admin_type, Some(AdminType::Warden));
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn profile_picture_can_be_set_and_cleared() {
        let mut user = User::new("u1", "Asha", "asha@campus.edu", UserRole::Student);
        user.apply(UserPatch {
            profile_picture: Some(Some("https://img.example/asha.png".to_string())),
            ..UserPatch::default()
        });
        assert_eq!(
            user.profile_picture.as_deref(),
            Some("https://img.example/asha.png")
        );

        user.apply(UserPatch {
            name: Some("Asha K".to_string()),
            ..UserPatch::default()
        });
        assert!(user.profile_picture.is_some());

        user.apply(UserPatch {
            profile_picture: Some(None),
            ..UserPatch::default()
        });
        assert_eq!(user.profile_picture, None);
        assert_eq!(user.name, "Asha K");
    }

    #[test]
    fn role_display_matches_wire_value() {
        assert_eq!(UserRole::Educator.to_string(), "Educator");
    }
}
