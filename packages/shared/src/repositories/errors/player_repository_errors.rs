#[derive(Debug)]
pub enum PlayerRepositoryError {
    /// No player is stored under the requested id, or a conditional
    /// update/delete found nothing to act on.
    NotFound,
    /// A player with the same id was already written.
    AlreadyExists,
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for PlayerRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRepositoryError::NotFound => write!(f, "Player not found"),
            PlayerRepositoryError::AlreadyExists => {
                write!(f, "A player with this id already exists")
            }
            PlayerRepositoryError::Serialization(msg) => {
                write!(f, "Could not convert player item: {}", msg)
            }
            PlayerRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerRepositoryError {}
