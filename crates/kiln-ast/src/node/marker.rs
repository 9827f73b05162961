use std::fmt;

use crate::AccessLevel;

/// A declarative tag requesting one of the fixed transformations.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Getter,
    Setter,
    NoArgsConstructor { access: AccessLevel },
}

impl Marker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Getter => MarkerKind::Getter,
            Marker::Setter => MarkerKind::Setter,
            Marker::NoArgsConstructor { .. } => MarkerKind::NoArgsConstructor,
        }
    }
}

/// Payload-free discriminant of [`Marker`], used for discovery.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MarkerKind {
    Getter,
    Setter,
    NoArgsConstructor,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Getter => write!(f, "@Getter"),
            MarkerKind::Setter => write!(f, "@Setter"),
            MarkerKind::NoArgsConstructor => write!(f, "@NoArgsConstructor"),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::NoArgsConstructor { access } => {
                write!(f, "{}(access = {access})", self.kind())
            }
            _ => write!(f, "{}", self.kind()),
        }
    }
}
