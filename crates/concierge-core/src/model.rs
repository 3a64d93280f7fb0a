//! Record types for requests, chat messages and client profiles.
//!
//! Every enumerated field is a real enum that serializes with the dashboard's
//! wire spellings (`inProgress`, `dining`, ...) and parses back through
//! `FromStr`, so a record can only hold values the dashboard knows about.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Define a fieldless enum with a fixed string spelling per variant.
///
/// Generates `ALL`, `as_str`, `Display` and `FromStr` (which reports
/// `Error::InvalidValue` tagged with `$kind`).
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire spelling of this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(Error::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// What kind of errand a request is.
    Category, "category" {
        Dining => "dining",
        Travel => "travel",
        Shopping => "shopping",
        Event => "event",
        Errand => "errand",
        Other => "other",
    }
}

impl Category {
    /// Icon shown next to the request title.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Travel => "\u{2708}\u{fe0f}",
            Self::Dining => "\u{1f37d}\u{fe0f}",
            Self::Shopping => "\u{1f6cd}\u{fe0f}",
            Self::Event => "\u{1f389}",
            Self::Errand => "\u{1f3c3}",
            Self::Other => "\u{2753}",
        }
    }
}

string_enum! {
    Priority, "priority" {
        Normal => "normal",
        Urgent => "urgent",
    }
}

string_enum! {
    /// Lifecycle position of a request. Any status may follow any other.
    RequestStatus, "status" {
        Received => "received",
        InProgress => "inProgress",
        Completed => "completed",
    }
}

impl RequestStatus {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// The next status in display order, wrapping after `Completed`.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Received => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Received,
        }
    }
}

string_enum! {
    /// Status filter for the request list.
    #[derive(Default)]
    StatusFilter, "status filter" {
        #[default]
        All => "all",
        Received => "received",
        InProgress => "inProgress",
        Completed => "completed",
    }
}

impl StatusFilter {
    pub const fn matches(self, status: RequestStatus) -> bool {
        match self {
            Self::All => true,
            Self::Received => matches!(status, RequestStatus::Received),
            Self::InProgress => matches!(status, RequestStatus::InProgress),
            Self::Completed => matches!(status, RequestStatus::Completed),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Received => RequestStatus::Received.label(),
            Self::InProgress => RequestStatus::InProgress.label(),
            Self::Completed => RequestStatus::Completed.label(),
        }
    }

    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::Received,
            Self::Received => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

impl From<RequestStatus> for StatusFilter {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Received => Self::Received,
            RequestStatus::InProgress => Self::InProgress,
            RequestStatus::Completed => Self::Completed,
        }
    }
}

string_enum! {
    /// Who wrote a chat message.
    Sender, "sender" {
        Client => "client",
        Admin => "admin",
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id! {
    /// Stable identifier of a request (`req_1`).
    RequestId
}

string_id! {
    /// Identifier of a chat message (`msg_1`).
    MessageId
}

string_id! {
    /// Identifier of a client profile (`user_1`).
    ClientId
}

/// A client request handled by the concierge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: RequestId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: RequestStatus,
    /// Denormalized copy of the owning client's name.
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
    /// Unset until the first mutation when the seed data leaves it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Request {
    /// Last time the request changed, falling back to its creation time.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub const fn is_urgent(&self) -> bool {
        matches!(self.priority, Priority::Urgent)
    }
}

/// One chat line between the concierge and the client on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    /// Parent request. Not checked against the request store.
    pub request_id: RequestId,
    #[serde(rename = "message")]
    pub body: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Free-text preferences recorded on a client profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub favorite_restaurants: String,
    pub preferred_brands: String,
    pub travel_notes: String,
}

/// A client profile.
///
/// `total_requests` and `completed_requests` are maintained alongside the
/// profile and are not derived from the request store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub preferences: Preferences,
    pub total_requests: u32,
    pub completed_requests: u32,
    #[serde(rename = "vipStatus")]
    pub vip: bool,
}

impl Client {
    /// Initials for the avatar ("Alexander Sterling" -> "AS").
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_camel_case_spelling() {
        assert_eq!(RequestStatus::InProgress.as_str(), "inProgress");
        assert_eq!(
            "inProgress".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = "in_progress".parse::<RequestStatus>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue { kind: "status", ref value } if value == "in_progress"
        ));
        assert!("vip".parse::<Priority>().is_err());
        assert!(serde_json::from_str::<Category>("\"groceries\"").is_err());
    }

    #[test]
    fn filter_matches_exact_status_or_everything() {
        for status in RequestStatus::ALL {
            assert!(StatusFilter::All.matches(*status));
            assert!(StatusFilter::from(*status).matches(*status));
        }
        assert!(!StatusFilter::Completed.matches(RequestStatus::InProgress));
        assert!(!StatusFilter::Received.matches(RequestStatus::Completed));
    }

    #[test]
    fn filter_cycle_visits_every_filter() {
        let mut f = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..StatusFilter::ALL.len() {
            seen.push(f);
            f = f.cycle();
        }
        assert_eq!(f, StatusFilter::All);
        assert_eq!(seen, StatusFilter::ALL);
    }

    #[test]
    fn default_filter_shows_everything() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
        assert_eq!(
            serde_json::from_str::<StatusFilter>(r#""all""#).unwrap(),
            StatusFilter::default()
        );
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(RequestStatus::Completed.cycle(), RequestStatus::Received);
        assert_eq!(RequestStatus::Received.cycle(), RequestStatus::InProgress);
    }

    #[test]
    fn initials_take_first_letter_of_each_name() {
        let client = Client {
            id: ClientId::new("user_9"),
            full_name: "Ada  King Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: String::new(),
            preferences: Preferences::default(),
            total_requests: 0,
            completed_requests: 0,
            vip: false,
        };
        assert_eq!(client.initials(), "AKL");
    }

    #[test]
    fn request_deserializes_without_update_timestamp() {
        let json = r#"{
            "id": "req_9",
            "title": "Theatre tickets",
            "description": "Two seats",
            "category": "event",
            "priority": "urgent",
            "status": "received",
            "clientName": "A",
            "clientEmail": "a@example.com",
            "createdAt": "2025-07-26T00:00:00Z"
        }"#;
        let req: Request = serde_json::from_str(json).unwrap();
        assert_eq!(req.id.as_str(), "req_9");
        assert!(req.updated_at.is_none());
        assert!(req.notes.is_empty());
        assert!(req.is_urgent());
        assert_eq!(req.last_modified(), req.created_at);
    }
}
