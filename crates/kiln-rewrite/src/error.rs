use crate::UnitId;

/// Failures of the rewrite machinery itself.
///
/// Misplaced markers and duplicate members are not errors at this level; they
/// are reported as diagnostics or left for the host's semantic checker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// The unit id does not belong to this round.
    #[error("unknown compilation unit {unit:?}")]
    UnknownUnit { unit: UnitId },
    /// Another rewrite holds the unit.
    #[error("compilation unit {unit:?} is already checked out for rewrite")]
    AlreadyCheckedOut { unit: UnitId },
    /// The unit is borrowed for reading and cannot be checked out.
    #[error("compilation unit {unit:?} is borrowed for reading")]
    Borrowed { unit: UnitId },
}
