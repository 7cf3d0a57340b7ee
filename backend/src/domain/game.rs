//! Video game catalogue entities.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum accepted title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Validation failures for [`GameTitle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleValidationError {
    /// The title is empty or whitespace only.
    #[error("title must not be empty")]
    Empty,
    /// The title exceeds [`TITLE_MAX_CHARS`] characters.
    #[error("title must be at most {TITLE_MAX_CHARS} characters")]
    TooLong,
}

/// Validated, non-empty game title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Hollow Knight")]
pub struct GameTitle(String);

impl GameTitle {
    /// Validate and wrap a raw title.
    pub fn new(raw: impl Into<String>) -> Result<Self, TitleValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleValidationError::Empty);
        }
        if trimmed.chars().count() > TITLE_MAX_CHARS {
            return Err(TitleValidationError::TooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for GameTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for GameTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GameTitle {
    type Error = TitleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GameTitle> for String {
    fn from(value: GameTitle) -> Self {
        value.0
    }
}

/// Unique identifier of a catalogued game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = Uuid)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Attributes of a game before it has an identity.
///
/// Used for both creation and full replacement on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub title: GameTitle,
    pub platform: String,
    pub developer: String,
    pub publisher: String,
}

/// A catalogued video game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoGame {
    id: GameId,
    title: GameTitle,
    platform: String,
    developer: String,
    publisher: String,
}

impl VideoGame {
    /// Assemble a game from an identifier and draft attributes.
    #[must_use]
    pub fn from_draft(id: GameId, draft: GameDraft) -> Self {
        Self {
            id,
            title: draft.title,
            platform: draft.platform,
            developer: draft.developer,
            publisher: draft.publisher,
        }
    }

    /// Identifier of the game.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Validated title.
    #[must_use]
    pub fn title(&self) -> &GameTitle {
        &self.title
    }

    /// Platform the game runs on.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Studio that developed the game.
    #[must_use]
    pub fn developer(&self) -> &str {
        &self.developer
    }

    /// Publisher of record.
    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.publisher
    }
}
