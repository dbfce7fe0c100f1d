use crate::api::types::{HostMembership, InventoryRef};
use crate::prompt::PromptSelect;
use anyhow::Result;
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("'{0}' is not a valid non-smart inventory")]
    InvalidInventoryName(String),
}

/// Resolves the inventories a host creation batch targets.
///
/// Explicitly requested names must each match a known manageable
/// inventory; the first mismatch aborts the whole batch. With no names
/// requested the user picks interactively from everything known.
/// Requested names are returned in the order supplied, duplicates
/// included.
pub fn resolve_create_targets(
    requested: &[String],
    known: &[InventoryRef],
    prompt: &dyn PromptSelect,
) -> Result<Vec<InventoryRef>> {
    if !requested.is_empty() {
        let mut targets = Vec::with_capacity(requested.len());
        for name in requested {
            match known.iter().find(|inventory| &inventory.name == name) {
                Some(inventory) => {
                    debug!("the supplied inventory name '{name}' is a valid non-smart inventory");
                    targets.push(inventory.clone());
                }
                None => return Err(ResolveError::InvalidInventoryName(name.clone()).into()),
            }
        }
        return Ok(targets);
    }

    debug!("no inventory was specified, prompting for selection");
    let options: Vec<String> = known.iter().map(|inventory| inventory.name.clone()).collect();
    let picked = prompt.select_many("Select all inventories to create the host(s) in", &options)?;

    Ok(picked.into_iter().map(|idx| known[idx].clone()).collect())
}

/// Resolves which of a host's current memberships it should be removed
/// from.
///
/// Memberships in smart/constructed inventories are inherited through
/// filters and cannot be manually modified, so only memberships whose
/// inventory appears in the known manageable set are offered. An empty
/// candidate list is a per-host warning, not an error; the caller skips
/// the hostname and continues with the rest of the batch.
pub fn resolve_delete_targets(
    hostname: &str,
    memberships: &[HostMembership],
    known: &[InventoryRef],
    prompt: &dyn PromptSelect,
) -> Result<Vec<HostMembership>> {
    let candidates: Vec<HostMembership> = memberships
        .iter()
        .filter(|membership| {
            known
                .iter()
                .any(|inventory| inventory.name == membership.inventory_name)
        })
        .cloned()
        .collect();

    if candidates.is_empty() {
        warn!("no manageable inventory membership is known for {hostname}");
        return Ok(Vec::new());
    }

    let options: Vec<String> = candidates
        .iter()
        .map(|membership| membership.inventory_name.clone())
        .collect();
    let picked = prompt.select_many(
        &format!("Mark all inventories to remove {hostname} from"),
        &options,
    )?;

    Ok(picked.into_iter().map(|idx| candidates[idx].clone()).collect())
}
