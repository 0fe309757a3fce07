use clients_domain::{ClientFields, ClientId};
use tracing::{debug, error, warn};

use crate::{
    api::ClientApi,
    forms::{FormController, ValidationSchema},
    pipeline,
};

use super::{ScreenContext, SubmitOutcome};

/// State of a mounted "edit client" screen.
///
/// The form does not exist until prefill data arrives, so no input can be
/// applied while loading. A fetch that fails or finds nothing leaves the
/// screen loading.
#[derive(Debug)]
pub struct EditClientScreen {
    id: ClientId,
    schema: ValidationSchema,
    form: Option<FormController>,
    seeded_from: Option<ClientFields>,
}

impl EditClientScreen {
    pub fn mount(id: ClientId) -> Self {
        Self {
            id,
            schema: ValidationSchema::client(),
            form: None,
            seeded_from: None,
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn is_loading(&self) -> bool {
        self.form.is_none()
    }

    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController> {
        self.form.as_mut()
    }

    /// Fetches the record for the current identifier and seeds the form.
    ///
    /// Returns whether the form is ready for input afterwards.
    pub fn load(&mut self, api: &dyn ClientApi) -> bool {
        match api.fetch_client(&self.id) {
            Ok(fields) => {
                self.receive(fields);
                true
            }
            Err(err) => {
                warn!(client = %self.id, error = %err, "prefill fetch failed");
                !self.is_loading()
            }
        }
    }

    /// Seeds the form from fetched data, once per distinct payload.
    pub fn receive(&mut self, fields: ClientFields) {
        if self.seeded_from.as_ref() == Some(&fields) {
            return;
        }
        debug!(client = %self.id, "seeding edit form");
        match self.form.as_mut() {
            Some(form) => form.reset(fields.clone()),
            None => self.form = Some(FormController::new(self.schema.clone(), fields.clone())),
        }
        self.seeded_from = Some(fields);
    }

    /// Points the screen at another client. The form returns to loading.
    pub fn change_id(&mut self, id: ClientId) {
        if id == self.id {
            return;
        }
        self.id = id;
        self.form = None;
        self.seeded_from = None;
    }

    /// Validates and, when the form is valid, updates the client.
    ///
    /// A failed mutation is only logged.
    pub fn submit(&mut self, ctx: &ScreenContext<'_>) -> SubmitOutcome {
        let Some(form) = self.form.as_mut() else {
            return SubmitOutcome::NotReady;
        };
        let Some(input) = form.submit() else {
            let invalid = form.current_errors().len();
            debug!(client = %self.id, invalid, "edit submit blocked by validation");
            return SubmitOutcome::Blocked { invalid };
        };

        match pipeline::submit_update(ctx, &self.id, &input) {
            Ok(updated) => SubmitOutcome::Updated(updated),
            Err(err) => {
                error!(client = %self.id, error = %err, "client update failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }
}
