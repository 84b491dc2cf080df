use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::{User, UserFilter};

/// The account list is fixed at startup: no creates, patches or actions.
impl Entity for User {
    type Id = String;
    type CreatePayload = Infallible;
    type Patch = Infallible;
    type Filter = UserFilter;
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "User";

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), String> {
        match patch {}
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.matches(self)
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), String> {
        match action {}
    }
}
