//! GraphQL rendering of [`ClientApi`].
//!
//! Builds request documents with JSON variables and unwraps the standard
//! `{ data, errors }` envelope. Sending bytes is the transport's job.

use clients_domain::{ClientFields, ClientId, ClientRecord};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{ApiError, ApiResult};

use super::ClientApi;

pub const FETCH_CLIENT: &str = "query obtenerCliente($id: ID!) {
    obtenerCliente(id: $id) { firstName lastName company email phone }
}";

pub const LIST_CLIENTS: &str = "query obtenerClientesVendedor {
    obtenerClientesVendedor { id firstName lastName company email }
}";

pub const CREATE_CLIENT: &str = "mutation nuevoCliente($input: ClienteInput) {
    nuevoCliente(input: $input) { id firstName lastName company email phone }
}";

pub const UPDATE_CLIENT: &str = "mutation actualizarCliente($id: ID!, $input: ClienteInput) {
    actualizarCliente(id: $id, input: $input) { firstName lastName company email phone }
}";

/// One GraphQL operation ready to be posted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn fetch_client(id: &ClientId) -> Self {
        Self {
            query: FETCH_CLIENT,
            operation_name: "obtenerCliente",
            variables: json!({ "id": id }),
        }
    }

    pub fn list_clients() -> Self {
        Self {
            query: LIST_CLIENTS,
            operation_name: "obtenerClientesVendedor",
            variables: json!({}),
        }
    }

    pub fn create_client(input: &ClientFields) -> Self {
        Self {
            query: CREATE_CLIENT,
            operation_name: "nuevoCliente",
            variables: json!({ "input": input }),
        }
    }

    pub fn update_client(id: &ClientId, input: &ClientFields) -> Self {
        Self {
            query: UPDATE_CLIENT,
            operation_name: "actualizarCliente",
            variables: json!({ "id": id, "input": input }),
        }
    }
}

/// Carries a request to the GraphQL endpoint and returns the raw response body.
pub trait GraphQlTransport {
    fn execute(&self, request: &GraphQlRequest) -> ApiResult<Value>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// [`ClientApi`] spoken over a [`GraphQlTransport`].
#[derive(Debug, Clone)]
pub struct GraphQlClientApi<T> {
    transport: T,
}

impl<T: GraphQlTransport> GraphQlClientApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn run<D: DeserializeOwned>(&self, request: GraphQlRequest) -> ApiResult<Option<D>> {
        debug!(operation = request.operation_name, "sending graphql request");
        let raw = self.transport.execute(&request)?;
        let envelope: Envelope = serde_json::from_value(raw)?;
        if let Some(first) = envelope.errors.into_iter().next() {
            return Err(ApiError::Rejected(first.message));
        }
        let mut data = envelope
            .data
            .ok_or_else(|| ApiError::Decode("response has neither data nor errors".into()))?;
        let payload = data
            .get_mut(request.operation_name)
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(payload)?)
    }

    fn run_required<D: DeserializeOwned>(&self, request: GraphQlRequest) -> ApiResult<D> {
        let operation = request.operation_name;
        self.run(request)?
            .ok_or_else(|| ApiError::Decode(format!("`{operation}` returned null")))
    }
}

impl<T: GraphQlTransport> ClientApi for GraphQlClientApi<T> {
    fn fetch_client(&self, id: &ClientId) -> ApiResult<ClientFields> {
        self.run(GraphQlRequest::fetch_client(id))?
            .ok_or_else(|| ApiError::NotFound(id.clone()))
    }

    fn list_clients(&self) -> ApiResult<Vec<ClientRecord>> {
        self.run_required(GraphQlRequest::list_clients())
    }

    fn create_client(&self, input: &ClientFields) -> ApiResult<ClientRecord> {
        self.run_required(GraphQlRequest::create_client(input))
    }

    fn update_client(&self, id: &ClientId, input: &ClientFields) -> ApiResult<ClientFields> {
        self.run_required(GraphQlRequest::update_client(id, input))
    }
}
