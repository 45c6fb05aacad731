/// Movie identifiers are UUIDs, assigned at creation and immutable.
pub type MovieId = uuid::Uuid;

/// User identifiers are UUIDs issued by the (external) identity provider.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
