use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::customer_actor::ClientError;
use crate::domain::{Client, ClientPatch};
use crate::latency::{Latency, Operation};

/// Client for the back office's customer records.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Client>,
    latency: Latency,
}

impl_basic_client!(CustomerClient, Client, ClientError, client);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.latency.simulate(Operation::Read).await;
        debug!("Sending request");
        Ok(self.inner.list(()).await?)
    }

    /// # Errors
    /// [`ClientError::NotFound`] when no client has this id.
    #[instrument(skip(self, patch))]
    pub async fn update_client(&self, id: &str, patch: ClientPatch) -> Result<Client, ClientError> {
        self.latency.simulate(Operation::Write).await;
        debug!("Sending request");
        let updated = self.inner.update(id.to_string(), patch).await?;
        info!(client_name = %updated.name, "Client updated");
        Ok(updated)
    }
}
