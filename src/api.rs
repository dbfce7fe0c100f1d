pub mod client;
pub mod types;

use crate::api::client::ApiError;
use crate::api::types::{HostMembership, InventoryRecord};
use async_trait::async_trait;

/// The remote controller collaborator. The dispatch layer consumes only
/// these four operations; tests substitute a fake implementation.
#[async_trait]
pub trait ControllerApi {
    /// Fetches every inventory, of every kind, known to the controller.
    async fn list_inventories(&self) -> Result<Vec<InventoryRecord>, ApiError>;

    /// Fetches the inventory memberships of a single host. May include
    /// smart/constructed inventories; callers filter those out.
    async fn list_host_memberships(&self, hostname: &str)
        -> Result<Vec<HostMembership>, ApiError>;

    async fn create_host(&self, inventory_id: u64, hostname: &str) -> Result<(), ApiError>;

    async fn delete_host(&self, host_id: u64) -> Result<(), ApiError>;
}
