use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::{Dress, DressCreate, DressFilter, DressPatch};

impl Entity for Dress {
    type Id = String;
    type CreatePayload = DressCreate;
    type Patch = DressPatch;
    type Filter = DressFilter;
    type Action = Infallible;
    type ActionResult = ();

    const KIND: &'static str = "Dress";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Dress from a catalog form payload.
    ///
    /// # Errors
    /// Rejects a blank name, an empty image list or a negative price.
    fn from_create(id: String, params: DressCreate) -> Result<Self, String> {
        params.validate()?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            rental_price: params.rental_price,
            images: params.images,
            description: params.description,
            available: params.available,
            sizes: params.sizes,
        })
    }

    fn on_update(&mut self, patch: DressPatch) -> Result<(), String> {
        patch.validate()?;
        patch.apply(self);
        Ok(())
    }

    fn matches(&self, filter: &DressFilter) -> bool {
        filter.matches(self)
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), String> {
        match action {}
    }
}
