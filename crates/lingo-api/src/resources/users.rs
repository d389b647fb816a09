use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::jsonapi::Entity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAttributes {
    pub username: String,
}

pub type User = Entity<UserAttributes>;

/// Project maintainers and team managers are plain users.
pub type Maintainer = User;

impl Client {
    /// `GET /users/{user_id}`
    pub async fn get_user(&self, user_id: &str) -> Result<User, Error> {
        self.get_by_id("/users", "user", user_id).await
    }
}
