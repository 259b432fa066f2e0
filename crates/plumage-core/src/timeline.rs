//! Timeline data model.
//!
//! A timeline is a reverse-chronological slice of one user's posts, supplied
//! verbatim by an upstream fetcher. Everything here is a read-only input to
//! the engine; the engine never fetches or mutates timeline data.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// The body of a post.
///
/// Older wire formats deliver a possibly-truncated `text`; newer ones deliver
/// the complete body as `full_text`. Callers must resolve the effective body
/// through [`PostText::as_str`] and never read both fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostText {
    /// Complete, untruncated body.
    Extended {
        /// The full post body.
        full_text: String,
    },
    /// Possibly truncated body.
    Truncated {
        /// The truncated post body.
        text: String,
    },
}

impl PostText {
    /// The effective body: full text when present, truncated text otherwise.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Extended { full_text } => full_text,
            Self::Truncated { text } => text,
        }
    }
}

/// A hashtag entity extracted by the upstream platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hashtag {
    /// Tag text without the leading `#`.
    pub text: String,
}

/// A mentioned-account entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mention {
    /// Account handle without the leading `@`.
    pub handle: String,
}

/// An embedded URL entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlEntity {
    /// The URL as it appears in the post body (often shortened).
    pub url: String,
    /// The resolved destination, when the platform provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_url: Option<String>,
}

/// Structured sub-spans of a post body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    /// Hashtags in the body.
    pub hashtags: Vec<Hashtag>,
    /// Accounts mentioned in the body.
    pub mentions: Vec<Mention>,
    /// URLs embedded in the body.
    pub urls: Vec<UrlEntity>,
}

impl Entities {
    /// Total number of entities of all kinds.
    pub fn len(&self) -> usize {
        self.hashtags.len() + self.mentions.len() + self.urls.len()
    }

    /// Whether the post carries no entities at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The author record embedded in each post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Account handle without the leading `@`.
    pub handle: String,
    /// Follower count at fetch time.
    #[serde(default)]
    pub followers_count: u64,
    /// Following count at fetch time.
    #[serde(default)]
    pub following_count: u64,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
    /// Whether the account is verified.
    #[serde(default)]
    pub verified: bool,
    /// Profile bio, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Free-form location, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// External profile URL, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Calendar year the account was created.
    pub fn year_joined(&self) -> i32 {
        self.created_at.year()
    }
}

/// One unit of user-generated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// The post body (truncated or extended variant).
    #[serde(flatten)]
    pub text: PostText,
    /// The author record embedded in the post.
    pub author: Author,
    /// Structured entities extracted by the platform.
    #[serde(default)]
    pub entities: Entities,
    /// The origin post when this post reshares another.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reshare_of: Option<Box<Post>>,
    /// Favorite ("like") count.
    #[serde(default)]
    pub favorite_count: u64,
    /// Reshare ("retweet") count.
    #[serde(default)]
    pub reshare_count: u64,
}

impl Post {
    /// The origin post: the reshared post when this is a reshare, else self.
    pub fn origin(&self) -> &Self {
        self.reshare_of.as_deref().unwrap_or(self)
    }

    /// Origin-resolved body text.
    ///
    /// Reshares carry a mangled `RT @...` wrapper body; metrics that score
    /// prose must read the origin post's body instead.
    pub fn effective_text(&self) -> &str {
        self.origin().text.as_str()
    }
}
