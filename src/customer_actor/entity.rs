use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::{Client, ClientPatch};

/// Client records are only seeded and edited, never created through the store.
impl Entity for Client {
    type Id = String;
    type CreatePayload = Infallible;
    type Patch = ClientPatch;
    type Filter = ();
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "Client";

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, patch: ClientPatch) -> Result<(), String> {
        patch.apply(self);
        Ok(())
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), String> {
        match action {}
    }
}
