//! The user value type the rest of the library works with.

use crate::models::UserDto;

/// A user in the directory.
///
/// Immutable once constructed; compared by value. Items coming off the
/// wire are passed through as-is, there is no validation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl User {
    /// Display name joining the name parts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            avatar: dto.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_parts() {
        let user = User {
            id: 1,
            email: "janet.weaver@reqres.in".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: "avatar.jpg".to_string(),
        };
        assert_eq!(user.full_name(), "Janet Weaver");
    }

    #[test]
    fn converts_from_dto() {
        let dto = UserDto {
            id: 7,
            email: "michael.lawson@reqres.in".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Lawson".to_string(),
            avatar: "7-image.jpg".to_string(),
        };
        let user = User::from(dto.clone());
        assert_eq!(user.id, dto.id);
        assert_eq!(user.email, dto.email);
        assert_eq!(user.avatar, dto.avatar);
    }
}
