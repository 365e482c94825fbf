use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::dto::{CreateUserRequest, UpdateUserRequest};
use crate::db::{Db, DbError};

/// A user as exposed by the API. No table backs this yet.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Business-logic seam between the user routes and persistence.
///
/// Every method is a placeholder: lookups come back empty and writes
/// fail, pending the real users schema.
pub struct UserService {
    // Held for the eventual sqlx queries; nothing reads it yet.
    #[allow(dead_code)]
    db: Db,
}

impl UserService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// List users with pagination.
    pub async fn list_users(&self, _skip: i64, _limit: i64) -> Result<Vec<User>, DbError> {
        // TODO: select from the users table once the schema lands
        Ok(Vec::new())
    }

    /// Look a user up by id.
    pub async fn get_user_by_id(&self, _user_id: Uuid) -> Result<Option<User>, DbError> {
        Ok(None)
    }

    /// Look a user up by email.
    pub async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, DbError> {
        Ok(None)
    }

    /// Create a new user.
    pub async fn create_user(&self, _data: CreateUserRequest) -> Result<User, DbError> {
        Err(DbError::Unimplemented("user creation"))
    }

    /// Update an existing user.
    pub async fn update_user(
        &self,
        _user_id: Uuid,
        _data: UpdateUserRequest,
    ) -> Result<Option<User>, DbError> {
        Ok(None)
    }

    /// Delete a user. Returns whether a record was removed.
    pub async fn delete_user(&self, _user_id: Uuid) -> Result<bool, DbError> {
        Ok(false)
    }
}
