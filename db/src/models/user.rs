use bson::{Bson, Document, doc};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn new(role: impl Into<String>, db: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            db: db.into(),
        }
    }

    /// Full control over a single database.
    pub fn db_owner(db: impl Into<String>) -> Self {
        Self::new("dbOwner", db)
    }
}

/// A database account together with the roles it is granted.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseUser {
    pub name: String,
    pub password: String,
    pub roles: Vec<RoleGrant>,
}

impl DatabaseUser {
    pub fn new(name: impl Into<String>, password: impl Into<String>, roles: Vec<RoleGrant>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            roles,
        }
    }

    pub fn create_command(&self) -> Document {
        let roles: Vec<Bson> = self
            .roles
            .iter()
            .map(|r| Bson::Document(doc! { "role": &r.role, "db": &r.db }))
            .collect();

        doc! {
            "createUser": &self.name,
            "pwd": &self.password,
            "roles": roles,
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUser")
            .field("name", &self.name)
            .field("password", &"***")
            .field("roles", &self.roles)
            .finish()
    }
}
