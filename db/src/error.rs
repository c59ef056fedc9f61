pub type DbResult<T> = Result<T, DbError>;

/// Server error code for `NamespaceExists`.
pub const NAMESPACE_EXISTS_CODE: i32 = 48;
/// Server error code returned by `createUser` when the user is already defined.
pub const USER_EXISTS_CODE: i32 = 51003;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("user {0} already exists")]
    DuplicateCredential(String),

    #[error("collection {0} already exists")]
    CollectionAlreadyExists(String),

    #[error("failed to open connection to db: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("failed to insert into {collection}: {source}")]
    Write {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("insert into {collection} rejected: {reason}")]
    WriteRejected { collection: String, reason: String },

    #[error("database command failed: {0}")]
    Command(#[from] mongodb::error::Error),
}

/// Conflicts the seeders surface as their own error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    Namespace,
    User,
}

impl Conflict {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            NAMESPACE_EXISTS_CODE => Some(Conflict::Namespace),
            USER_EXISTS_CODE => Some(Conflict::User),
            _ => None,
        }
    }

    /// Extracts the conflict from a server command error, if it is one.
    pub fn from_error(err: &mongodb::error::Error) -> Option<Self> {
        match err.kind.as_ref() {
            mongodb::error::ErrorKind::Command(cmd) => Conflict::from_code(cmd.code),
            _ => None,
        }
    }
}
