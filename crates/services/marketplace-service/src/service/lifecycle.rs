//! Lifecycle operations shared by users, stores and offers.
//!
//! Each function works on any [`Lifecycled`] entity through its repository.
//! Nothing is persisted when a transition is refused.

use tracing::{info, warn};
use uuid::Uuid;

use common::OptionExt;
use domain::{DomainError, DomainResult, Lifecycled, OfferParty, Persistable};

use crate::repository::{OfferRepository, Repository};

/// Internal lookup; ignores the display guard.
pub(crate) async fn fetch<E, R>(repo: &R, id: Uuid) -> DomainResult<E>
where
    E: Persistable,
    R: Repository<E> + ?Sized,
{
    repo.find_by_id(id).await?.ok_or_not_found(E::KIND, id)
}

/// Lookup for external display; inactive entities are refused.
pub(crate) async fn view<E, R>(repo: &R, id: Uuid) -> DomainResult<E>
where
    E: Lifecycled,
    R: Repository<E> + ?Sized,
{
    fetch::<E, R>(repo, id).await?.ensure_displayable()
}

pub(crate) async fn deactivate<E, R>(
    repo: &R,
    offers: &dyn OfferRepository,
    id: Uuid,
) -> DomainResult<E>
where
    E: Lifecycled,
    R: Repository<E> + ?Sized,
{
    let mut entity: E = fetch(repo, id).await?;
    entity.lifecycle_mut().deactivate(E::KIND, id)?;

    if let Some(party) = E::OFFER_PARTY {
        let in_use = match party {
            OfferParty::Store => offers.find_active_by_store(id).await?,
            OfferParty::Client => offers.find_active_by_client(id).await?,
        };
        if !in_use.is_empty() {
            warn!(kind = %E::KIND, %id, active_offers = in_use.len(), "Deactivation blocked");
            return Err(DomainError::InUse { kind: E::KIND, id });
        }
    }

    let saved = repo.save(entity).await?;
    info!(kind = %E::KIND, %id, "Deactivated");
    Ok(saved)
}

pub(crate) async fn reactivate<E, R>(repo: &R, id: Uuid) -> DomainResult<E>
where
    E: Lifecycled,
    R: Repository<E> + ?Sized,
{
    let mut entity: E = fetch(repo, id).await?;
    entity.lifecycle_mut().reactivate(E::KIND, id)?;

    let saved = repo.save(entity).await?;
    info!(kind = %E::KIND, %id, "Reactivated");
    Ok(saved)
}
