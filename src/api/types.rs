use serde::Deserialize;

/// One inventory known to the controller, as used for targeting
/// create/remove operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryRef {
    pub id: u64,
    pub name: String,
}

/// Membership of a single host in a single inventory, produced when
/// resolving removal targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostMembership {
    pub host_id: u64,
    pub inventory_id: u64,
    pub inventory_name: String,
}

/// One page of a paginated AWX list response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub next: Option<String>,
    pub results: Vec<T>,
}

/// Wire record from `GET /inventories/`. Deserialization fails fast on
/// missing fields rather than propagating partially populated records.
#[derive(Clone, Debug, Deserialize)]
pub struct InventoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub kind: String,
}

impl InventoryRecord {
    /// Smart and constructed inventories compute their membership from
    /// filters; hosts cannot be manually added or removed from them.
    /// Every other kind is an ordinary, manageable inventory.
    pub fn is_manageable(&self) -> bool {
        !matches!(self.kind.as_str(), "smart" | "constructed")
    }

    pub fn to_ref(&self) -> InventoryRef {
        InventoryRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Collects the manageable subset of the fetched inventories.
pub fn manageable_inventories(records: &[InventoryRecord]) -> Vec<InventoryRef> {
    records
        .iter()
        .filter(|r| r.is_manageable())
        .map(InventoryRecord::to_ref)
        .collect()
}

/// Wire record from `GET /hosts/`. The hosts endpoint does not expose the
/// inventory kind, only its id and name through `summary_fields`.
#[derive(Clone, Debug, Deserialize)]
pub struct HostRecord {
    pub id: u64,
    pub name: String,
    pub summary_fields: HostSummaryFields,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HostSummaryFields {
    pub inventory: InventorySummary,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InventorySummary {
    pub id: u64,
    pub name: String,
}

impl HostRecord {
    pub fn to_membership(&self) -> HostMembership {
        HostMembership {
            host_id: self.id,
            inventory_id: self.summary_fields.inventory.id,
            inventory_name: self.summary_fields.inventory.name.clone(),
        }
    }
}
