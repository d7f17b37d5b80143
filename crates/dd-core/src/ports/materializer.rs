use async_trait::async_trait;

use crate::resource::{MaterializedResource, TransientResource};

use super::ProviderFault;

/// Port for copying a transient resource into durable application storage.
///
/// Implementations must close every channel on every exit path and must
/// not return a reference to a partially written destination; a failed
/// copy leaves nothing referenced.
#[async_trait]
pub trait ResourceMaterializerPort: Send + Sync {
    async fn materialize(
        &self,
        transient: &TransientResource,
    ) -> Result<MaterializedResource, ProviderFault>;
}
