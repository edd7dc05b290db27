//! User entity <- model mapper

use linker_core::entities::User;

use super::parse_column;
use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            phone: model.phone,
            role: parse_column("users.role", &model.role),
            status: parse_column("users.status", &model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
