use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::resource::TransientResource;

use super::ProviderFault;

/// Byte stream read out of a provider-owned transient handle.
pub type TransientByteStream = Box<dyn AsyncRead + Send + Unpin>;

/// Port for reading the bytes behind a transient resource handle.
///
/// The handle is only valid for the invocation that produced it; the
/// stream must be fully consumed (or dropped) before the flow completes.
#[async_trait]
pub trait TransientReadPort: Send + Sync {
    async fn open_read(
        &self,
        handle: &TransientResource,
    ) -> Result<TransientByteStream, ProviderFault>;
}
