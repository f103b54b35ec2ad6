//! Newtype wrappers for string identifiers used across the configuration.
//!
//! All newtypes serialize/deserialize as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new instance from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Return the inner string as a slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_newtype!(
    /// Opaque object identifier inside a project manifest (e.g. `A1234567890ABCDEF100`).
    ObjectId
);

string_newtype!(
    /// Lookup key of a swatch style, also used in the output file name.
    StyleKey
);

/// An RGB color triple, written as `[r, g, b]` in configuration.
pub type Rgb = [u8; 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_display_and_as_ref() {
        let id = ObjectId::new("A1234567890ABCDEF100");
        assert_eq!(id.to_string(), "A1234567890ABCDEF100");
        assert_eq!(id.as_str(), "A1234567890ABCDEF100");
        assert_eq!(AsRef::<str>::as_ref(&id), "A1234567890ABCDEF100");
    }

    #[test]
    fn object_id_serde_is_transparent() {
        let id = ObjectId::new("deadbeef");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"deadbeef\"");
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn style_key_deref_allows_str_methods() {
        let key = StyleKey::from("film_noir");
        assert!(key.contains("film"));
        assert_eq!(&key, "film_noir");
    }
}
