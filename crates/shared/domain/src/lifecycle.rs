//! Soft-delete lifecycle shared by users, stores and offers.
//!
//! Every lifecycled entity embeds one [`Lifecycle`] and exposes it through
//! [`Lifecycled`], so activation rules live in one place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Entity kinds known to the domain, used to tag errors and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Store,
    Vehicle,
    Offer,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Store => "Store",
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Offer => "Offer",
        };
        f.write_str(name)
    }
}

/// Role in which an entity is referenced by offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferParty {
    Client,
    Store,
}

/// Active/inactive flag. Entities start active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    active: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self { active: true }
    }
}

impl Lifecycle {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active -> Inactive.
    pub fn deactivate(&mut self, kind: EntityKind, id: Uuid) -> DomainResult<()> {
        if !self.active {
            return Err(DomainError::AlreadyInactive { kind, id });
        }
        self.active = false;
        Ok(())
    }

    /// Inactive -> Active.
    pub fn reactivate(&mut self, kind: EntityKind, id: Uuid) -> DomainResult<()> {
        if self.active {
            return Err(DomainError::AlreadyActive { kind, id });
        }
        self.active = true;
        Ok(())
    }
}

/// Anything persisted with a surrogate id assigned on first save.
pub trait Persistable: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Option<Uuid>;

    /// Set by persistence on first save.
    fn assign_id(&mut self, id: Uuid);
}

/// Entities carrying a soft-delete [`Lifecycle`].
pub trait Lifecycled: Persistable {
    /// Role in which active offers reference this kind, if any.
    /// Deactivation is refused while such offers exist.
    const OFFER_PARTY: Option<OfferParty>;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }

    /// Display guard: inactive entities cannot be shown externally.
    fn ensure_displayable(self) -> DomainResult<Self> {
        if self.is_active() {
            return Ok(self);
        }
        Err(DomainError::Deactivated {
            kind: Self::KIND,
            id: self.id().unwrap_or_default(),
        })
    }
}
