//! Filesystem resource materializer.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::io;
use tracing::{debug_span, Instrument};

use dd_core::ports::{ProviderFault, ResourceMaterializerPort, TransientReadPort};
use dd_core::resource::{MaterializedResource, TransientResource};

/// Copies a transient resource into a file under the application cache
/// directory.
///
/// The destination is referenced only after the copy fully completed; on
/// any failure the partial file is deleted and nothing is returned. Both
/// the read stream and the destination file close on every exit path by
/// going out of scope.
pub struct FsResourceMaterializer {
    source: Arc<dyn TransientReadPort>,
    dest_dir: PathBuf,
}

impl FsResourceMaterializer {
    pub fn new(source: Arc<dyn TransientReadPort>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            dest_dir: dest_dir.into(),
        }
    }

    async fn discard_partial(&self, dest: &PathBuf) {
        // Best effort; an orphaned file on disk is acceptable, a
        // reference to one is not.
        let _ = fs::remove_file(dest).await;
    }
}

#[async_trait]
impl ResourceMaterializerPort for FsResourceMaterializer {
    async fn materialize(
        &self,
        transient: &TransientResource,
    ) -> Result<MaterializedResource, ProviderFault> {
        let span = debug_span!(
            "platform.materialize",
            file_name = %transient.file_name,
        );

        async {
            fs::create_dir_all(&self.dest_dir)
                .await
                .map_err(|err| ProviderFault::failed(format!("destination unwritable: {err}")))?;

            let mut reader = self.source.open_read(transient).await?;

            let dest = self.dest_dir.join(&transient.file_name);
            let mut file = fs::File::create(&dest)
                .await
                .map_err(|err| ProviderFault::failed(format!("destination unwritable: {err}")))?;

            let copied = match io::copy(&mut reader, &mut file).await {
                Ok(copied) => copied,
                Err(err) => {
                    drop(file);
                    self.discard_partial(&dest).await;
                    return Err(ProviderFault::failed(format!("copy interrupted: {err}")));
                }
            };

            if let Err(err) = file.sync_all().await {
                drop(file);
                self.discard_partial(&dest).await;
                return Err(ProviderFault::failed(format!("copy not durable: {err}")));
            }

            Ok(MaterializedResource::new(
                dest,
                copied,
                transient.file_name.clone(),
            ))
        }
        .instrument(span)
        .await
    }
}
