//! Ownership of the compilation units of one round.
//!
//! A unit must be checked out before it is rewritten. At most one
//! [`RewriteGuard`] exists per unit; the guard releases the unit when dropped.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::ops::{Deref, DerefMut};

use kiln_ast::{CompilationUnit, TreeMaker};

use crate::RewriteError;

/// Index of a compilation unit inside a [`Round`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitId(usize);

impl UnitId {
    /// return raw ID as usize
    pub fn raw(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct UnitSlot {
    unit: RefCell<CompilationUnit>,
    checked_out: Cell<bool>,
}

/// One compilation round: the tree maker and every unit it built.
#[derive(Debug, Default)]
pub struct Round {
    maker: TreeMaker,
    units: Vec<UnitSlot>,
}

impl Round {
    pub fn new(maker: TreeMaker) -> Self {
        Self {
            maker,
            units: Vec::new(),
        }
    }

    pub fn maker(&self) -> &TreeMaker {
        &self.maker
    }

    pub fn add_unit(&mut self, unit: CompilationUnit) -> UnitId {
        let id = UnitId(self.units.len());
        self.units.push(UnitSlot {
            unit: RefCell::new(unit),
            checked_out: Cell::new(false),
        });
        id
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + use<> {
        (0..self.units.len()).map(UnitId)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn slot(&self, id: UnitId) -> Result<&UnitSlot, RewriteError> {
        self.units
            .get(id.0)
            .ok_or(RewriteError::UnknownUnit { unit: id })
    }

    /// Borrow a unit for reading. Fails while the unit is checked out.
    pub fn unit(&self, id: UnitId) -> Result<Ref<'_, CompilationUnit>, RewriteError> {
        let slot = self.slot(id)?;
        slot.unit
            .try_borrow()
            .map_err(|_| RewriteError::AlreadyCheckedOut { unit: id })
    }

    /// Check a unit out for exclusive rewriting.
    pub fn checkout(&self, id: UnitId) -> Result<RewriteGuard<'_>, RewriteError> {
        let slot = self.slot(id)?;
        if slot.checked_out.get() {
            return Err(RewriteError::AlreadyCheckedOut { unit: id });
        }
        let unit = slot
            .unit
            .try_borrow_mut()
            .map_err(|_| RewriteError::Borrowed { unit: id })?;
        slot.checked_out.set(true);
        tracing::trace!(unit = id.0, "checked out compilation unit");
        Ok(RewriteGuard {
            id,
            unit,
            checked_out: &slot.checked_out,
        })
    }

    pub fn is_checked_out(&self, id: UnitId) -> bool {
        self.units
            .get(id.0)
            .is_some_and(|slot| slot.checked_out.get())
    }
}

/// Exclusive write access to one compilation unit.
pub struct RewriteGuard<'a> {
    id: UnitId,
    unit: RefMut<'a, CompilationUnit>,
    checked_out: &'a Cell<bool>,
}

impl Deref for RewriteGuard<'_> {
    type Target = CompilationUnit;

    fn deref(&self) -> &Self::Target {
        &self.unit
    }
}

impl DerefMut for RewriteGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.unit
    }
}

impl Drop for RewriteGuard<'_> {
    fn drop(&mut self) {
        self.checked_out.set(false);
        tracing::trace!(unit = self.id.0, "released compilation unit");
    }
}
