//! Remote operations the client screens depend on.
//!
//! Screens only see the [`ClientApi`] trait. [`LocalClientStore`] answers it
//! in-process and [`GraphQlClientApi`] renders it onto a GraphQL endpoint.

pub mod graphql;
pub mod local;

use clients_domain::{ClientFields, ClientId, ClientRecord};

use crate::errors::ApiResult;

pub use graphql::{GraphQlClientApi, GraphQlRequest, GraphQlTransport};
pub use local::LocalClientStore;

/// Reads and mutations available on the remote client service.
pub trait ClientApi {
    /// Fetches the editable values of one client.
    fn fetch_client(&self, id: &ClientId) -> ApiResult<ClientFields>;

    /// Lists the current user's clients in server order. Items carry no phone.
    fn list_clients(&self) -> ApiResult<Vec<ClientRecord>>;

    /// Creates a client and returns it with its assigned identifier.
    fn create_client(&self, input: &ClientFields) -> ApiResult<ClientRecord>;

    /// Overwrites the values of an existing client and echoes them back.
    fn update_client(&self, id: &ClientId, input: &ClientFields) -> ApiResult<ClientFields>;
}
