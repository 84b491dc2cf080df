use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Dress, DressCreate, DressFilter, DressPatch};
use crate::dress_actor::DressError;
use crate::latency::{Latency, Operation};

/// Client for the dress catalog.
#[derive(Clone)]
pub struct DressClient {
    inner: ResourceClient<Dress>,
    latency: Latency,
}

impl_basic_client!(DressClient, Dress, DressError, dress);

impl DressClient {
    /// Lists dresses matching every condition of `filter`, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_dresses(&self, filter: DressFilter) -> Result<Vec<Dress>, DressError> {
        self.latency.simulate(Operation::Read).await;
        debug!("Sending request");
        Ok(self.inner.list(filter).await?)
    }

    #[instrument(skip(self, dress), fields(dress_name = %dress.name, category = %dress.category))]
    pub async fn create_dress(&self, dress: DressCreate) -> Result<Dress, DressError> {
        self.latency.simulate(Operation::Write).await;
        debug!("Sending request");
        let created = self.inner.create(dress).await?;
        info!(dress_id = %created.id, "Dress created");
        Ok(created)
    }

    /// # Errors
    /// [`DressError::NotFound`] when no dress has this id.
    #[instrument(skip(self, patch))]
    pub async fn update_dress(&self, id: &str, patch: DressPatch) -> Result<Dress, DressError> {
        self.latency.simulate(Operation::Write).await;
        debug!("Sending request");
        Ok(self.inner.update(id.to_string(), patch).await?)
    }

    /// Removes a dress. Deleting an unknown id is a no-op, so repeating a
    /// delete is harmless.
    #[instrument(skip(self))]
    pub async fn delete_dress(&self, id: &str) -> Result<(), DressError> {
        self.latency.simulate(Operation::Delete).await;
        debug!("Sending request");
        let removed = self.inner.delete(id.to_string()).await?;
        if !removed {
            debug!("Dress already absent");
        }
        Ok(())
    }

    /// Lookup without simulated latency, for callers that already paid it.
    pub(crate) async fn lookup_dress(&self, id: &str) -> Result<Option<Dress>, DressError> {
        Ok(self.inner.get(id.to_string()).await?)
    }
}
