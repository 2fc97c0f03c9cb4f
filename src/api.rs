//! Identifier newtypes shared across the crate.
//!
//! Ids are string-backed: the data this engine ingests comes from systems
//! that key entities with opaque string ids, and freshly created records get
//! UUID v4 ids via [`RehearsalId::generate`] and friends.

use serde::{Deserialize, Serialize};

/// Actor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub String);

/// Scene identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneId(pub String);

/// Timeslot identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeslotId(pub String);

/// Rehearsal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RehearsalId(pub String);

macro_rules! impl_string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            /// Mint a fresh random identifier.
            pub fn generate() -> Self {
                $name(uuid::Uuid::new_v4().to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }
    };
}

impl_string_id!(ActorId);
impl_string_id!(SceneId);
impl_string_id!(TimeslotId);
impl_string_id!(RehearsalId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new_and_value() {
        let id = TimeslotId::new("mon-evening");
        assert_eq!(id.value(), "mon-evening");
        assert_eq!(id.to_string(), "mon-evening");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ActorId::from("a1"), ActorId::new("a1"));
        assert_ne!(ActorId::from("a1"), ActorId::new("a2"));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = RehearsalId::generate();
        let b = RehearsalId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SceneId::new("scene-7")).unwrap();
        assert_eq!(json, r#""scene-7""#);
    }
}
