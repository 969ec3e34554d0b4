//! Strongly-typed ID newtypes for domain entities.
//!
//! Every organisational tier gets its own ID type so a desa ID can never be
//! compared against a kelompok ID by accident. Scope checks rely on this:
//! they only ever compare IDs of the same tier.
//!
//! # Example
//!
//! ```ignore
//! use sekolah_models::ids::{DesaId, KelompokId};
//!
//! let desa = DesaId::new();
//! let kelompok = KelompokId::new();
//! // assert_eq!(desa, kelompok); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a transparent `Uuid` wrapper with serde support and the usual
/// conversions.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for constants and fixtures).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        // Manual impl so the wire form stays a bare UUID string
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for user profiles.
    UserId
);

define_id!(
    /// Strongly-typed ID for students.
    StudentId
);

define_id!(
    /// Strongly-typed ID for meetings (class sessions).
    MeetingId
);

define_id!(
    /// Strongly-typed ID for classes (kelas).
    ClassId
);

define_id!(
    /// Strongly-typed ID for kelompok, the narrowest organisational tier.
    KelompokId
);

define_id!(
    /// Strongly-typed ID for desa, the middle organisational tier.
    DesaId
);

define_id!(
    /// Strongly-typed ID for daerah, the broadest organisational tier.
    DaerahId
);
