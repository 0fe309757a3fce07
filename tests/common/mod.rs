#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use client_forms::{
    api::ClientApi,
    cache::InMemoryClientListCache,
    errors::{ApiError, ApiResult},
    screens::{Navigator, Notice, Notifier, Route, ScreenContext},
    time::ManualClock,
    timer::TimerQueue,
};
use clients_domain::{ClientField, ClientFields, ClientId, ClientRecord};

/// Every request the scripted API received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(ClientId),
    List,
    Create(ClientFields),
    Update(ClientId, ClientFields),
}

/// In-memory API whose failures are chosen by the test.
#[derive(Default)]
pub struct ScriptedApi {
    clients: RefCell<Vec<ClientRecord>>,
    create_failure: RefCell<Option<String>>,
    update_failure: RefCell<Option<String>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
}

impl ScriptedApi {
    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        let api = Self::default();
        api.next_id.set(clients.len() as u32);
        *api.clients.borrow_mut() = clients;
        api
    }

    pub fn fail_create_with(&self, message: &str) {
        *self.create_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_update_with(&self, message: &str) {
        *self.update_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Create(_) | Call::Update(..)))
            .count()
    }

    pub fn list_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::List))
            .count()
    }
}

impl ClientApi for ScriptedApi {
    fn fetch_client(&self, id: &ClientId) -> ApiResult<ClientFields> {
        self.calls.borrow_mut().push(Call::Fetch(id.clone()));
        self.clients
            .borrow()
            .iter()
            .find(|client| &client.id == id)
            .map(ClientRecord::fields)
            .ok_or_else(|| ApiError::NotFound(id.clone()))
    }

    fn list_clients(&self) -> ApiResult<Vec<ClientRecord>> {
        self.calls.borrow_mut().push(Call::List);
        Ok(self.clients.borrow().clone())
    }

    fn create_client(&self, input: &ClientFields) -> ApiResult<ClientRecord> {
        self.calls.borrow_mut().push(Call::Create(input.clone()));
        if let Some(message) = self.create_failure.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let record = ClientRecord::from_fields(ClientId::new(id.to_string()), input.clone());
        self.clients.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn update_client(&self, id: &ClientId, input: &ClientFields) -> ApiResult<ClientFields> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id.clone(), input.clone()));
        if let Some(message) = self.update_failure.borrow().clone() {
            return Err(ApiError::Rejected(message));
        }
        let mut clients = self.clients.borrow_mut();
        let client = clients
            .iter_mut()
            .find(|client| &client.id == id)
            .ok_or_else(|| ApiError::NotFound(id.clone()))?;
        client.apply(input.clone());
        Ok(client.fields())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// All collaborators of a screen, owned by the test.
pub struct Harness {
    pub api: ScriptedApi,
    pub cache: InMemoryClientListCache,
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
    pub clock: ManualClock,
    pub timers: TimerQueue,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_api(ScriptedApi::default())
    }

    pub fn with_api(api: ScriptedApi) -> Self {
        Self {
            api,
            cache: InMemoryClientListCache::new(),
            navigator: RecordingNavigator::default(),
            notifier: RecordingNotifier::default(),
            clock: ManualClock::default(),
            timers: TimerQueue::new(),
        }
    }

    pub fn ctx(&self) -> ScreenContext<'_> {
        ScreenContext {
            api: &self.api,
            cache: &self.cache,
            navigator: &self.navigator,
            notifier: &self.notifier,
            clock: &self.clock,
            timers: &self.timers,
        }
    }
}

pub fn jane() -> ClientFields {
    ClientFields::default()
        .with(ClientField::FirstName, "Jane")
        .with(ClientField::LastName, "Doe")
        .with(ClientField::Company, "Acme")
        .with(ClientField::Email, "jane@acme.com")
}

pub fn record(id: &str, fields: ClientFields) -> ClientRecord {
    ClientRecord::from_fields(ClientId::new(id), fields)
}

/// Types `fields` into a form the way a user would: change, then blur.
pub fn type_into(form: &mut client_forms::forms::FormController, fields: &ClientFields) {
    for field in ClientField::ALL {
        form.set_value(field, fields.get(field));
        form.touch(field);
    }
}
