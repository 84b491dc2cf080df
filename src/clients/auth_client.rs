use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserFilter};
use crate::latency::{Latency, Operation};
use crate::user_actor::AuthError;

/// The one password every demo account accepts.
pub const SHARED_PASSWORD: &str = "123456";

/// Client for the login check.
#[derive(Clone)]
pub struct AuthClient {
    inner: ResourceClient<User>,
    latency: Latency,
}

impl_client_new!(AuthClient, User, AuthError);

impl AuthClient {
    /// Returns the account with exactly this email when the password is the
    /// shared secret.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] for an unknown email or a wrong
    /// password; the two cases are indistinguishable to the caller.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.latency.simulate(Operation::Login).await;
        debug!("Sending request");

        let user = self.inner.list(UserFilter::email(email)).await?.into_iter().next();
        match user {
            Some(user) if password == SHARED_PASSWORD => {
                info!(user_id = %user.id, role = ?user.role, "Login succeeded");
                Ok(user)
            }
            _ => {
                warn!("Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
