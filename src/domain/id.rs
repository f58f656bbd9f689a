//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a database row id.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the raw row id.
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }
    };
}

row_id!(
    /// Board identifier - newtype for type safety.
    BoardId
);

row_id!(
    /// Board column identifier - newtype for type safety.
    ColumnId
);

row_id!(
    /// Card identifier - newtype for type safety.
    CardId
);

row_id!(
    /// Block record identifier.
    BlockId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_raw_value() {
        assert_eq!(BoardId::new(7).to_string(), "7");
        assert_eq!(CardId::from(12).value(), 12);
    }

    #[test]
    fn ids_parse_trimmed_input() {
        assert_eq!(" 42 ".parse::<ColumnId>().unwrap(), ColumnId::new(42));
        assert!("abc".parse::<CardId>().is_err());
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&BoardId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
