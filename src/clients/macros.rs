/// Generates a `get_<entity>` lookup: read latency, then an `Option` answer.
/// Absence is not an error.
macro_rules! impl_client_lookup {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: &str) -> Result<Option<$entity>, $error> {
                    self.latency.simulate(crate::latency::Operation::Read).await;
                    tracing::debug!("Sending request");
                    Ok(self.inner.get(id.to_string()).await?)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty, $error:ty) => {
        impl $client_name {
            pub fn new(
                inner: crate::actor_framework::ResourceClient<$entity>,
                latency: crate::latency::Latency,
            ) -> Self {
                Self { inner, latency }
            }

            /// Stops the backing actor once queued requests are served.
            #[tracing::instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), $error> {
                tracing::debug!("Sending shutdown request");
                Ok(self.inner.shutdown().await?)
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity, $error);
        impl_client_lookup!($client_name, $entity, $error, $entity_name_snake);
    };
}
