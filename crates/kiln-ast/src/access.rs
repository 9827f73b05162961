//! Access levels and the modifier flag set.
//!
//! The flag values are fixed by the host compiler's modifier encoding and must
//! not change: PUBLIC=1, PRIVATE=2, PROTECTED=4, STATIC=8, FINAL=16.
//! Package-private is the absence of all three access bits.

use std::fmt;

/// Visibility of a declaration.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl AccessLevel {
    /// Source keyword, empty for package-private.
    pub fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Protected => "protected",
            AccessLevel::PackagePrivate => "",
            AccessLevel::Private => "private",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::PackagePrivate => write!(f, "package-private"),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

/// Modifier flag set attached to classes, fields and methods.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers(u64);

impl Modifiers {
    const PUBLIC: u64 = 1;
    const PRIVATE: u64 = 1 << 1;
    const PROTECTED: u64 = 1 << 2;
    const STATIC: u64 = 1 << 3;
    const FINAL: u64 = 1 << 4;
    const ACCESS_MASK: u64 = Self::PUBLIC | Self::PRIVATE | Self::PROTECTED;

    /// Decode flags handed over by the host.
    pub fn from_bits(bits: u64) -> Self {
        Modifiers(bits)
    }

    /// Encode for the host. This is the only place raw flags leave the model.
    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn with_static(self) -> Self {
        Modifiers(self.0 | Self::STATIC)
    }

    pub fn with_final(self) -> Self {
        Modifiers(self.0 | Self::FINAL)
    }

    pub fn is_static(self) -> bool {
        self.0 & Self::STATIC != 0
    }

    pub fn is_final(self) -> bool {
        self.0 & Self::FINAL != 0
    }

    /// Replace the access bits, keeping every other flag.
    pub fn with_access(self, access: AccessLevel) -> Self {
        Modifiers((self.0 & !Self::ACCESS_MASK) | Modifiers::from(access).0)
    }

    /// The access level, or `None` when the flags carry more than one access bit.
    pub fn access(self) -> Option<AccessLevel> {
        match self.0 & Self::ACCESS_MASK {
            0 => Some(AccessLevel::PackagePrivate),
            Self::PUBLIC => Some(AccessLevel::Public),
            Self::PRIVATE => Some(AccessLevel::Private),
            Self::PROTECTED => Some(AccessLevel::Protected),
            _ => None,
        }
    }
}

impl From<AccessLevel> for Modifiers {
    fn from(access: AccessLevel) -> Self {
        match access {
            AccessLevel::Public => Modifiers(Self::PUBLIC),
            AccessLevel::PackagePrivate => Modifiers(0),
            AccessLevel::Private => Modifiers(Self::PRIVATE),
            AccessLevel::Protected => Modifiers(Self::PROTECTED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_flag_encoding() {
        assert_eq!(Modifiers::from(AccessLevel::Public).bits(), 1);
        assert_eq!(Modifiers::from(AccessLevel::PackagePrivate).bits(), 0);
        assert_eq!(Modifiers::from(AccessLevel::Private).bits(), 2);
        assert_eq!(Modifiers::from(AccessLevel::Protected).bits(), 4);
    }

    #[test]
    fn test_access_level_round_trips_through_flags() {
        for level in [
            AccessLevel::Public,
            AccessLevel::Protected,
            AccessLevel::PackagePrivate,
            AccessLevel::Private,
        ] {
            assert_eq!(Modifiers::from(level).access(), Some(level));
        }
    }

    #[test]
    fn test_with_access_keeps_other_flags() {
        let mods = Modifiers::from(AccessLevel::Public)
            .with_static()
            .with_final()
            .with_access(AccessLevel::Private);
        assert_eq!(mods.access(), Some(AccessLevel::Private));
        assert!(mods.is_static());
        assert!(mods.is_final());
        assert_eq!(mods.bits(), 2 | 8 | 16);
    }

    #[test]
    fn test_conflicting_access_bits() {
        assert_eq!(Modifiers::from_bits(1 | 2).access(), None);
    }
}
