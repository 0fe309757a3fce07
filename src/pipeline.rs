//! What happens after a form passes validation.
//!
//! Each submit performs exactly one mutation. There is no retry and no guard
//! against a second submit while the first is in flight.

use clients_domain::{ClientFields, ClientId, ClientRecord};
use tracing::{info, warn};

use crate::{
    cache::patch_created_client,
    errors::ApiResult,
    screens::{Notice, Route, ScreenContext},
};

/// Creates the client, patches the cached listing, then redirects to it.
///
/// A cache patch failure is logged and does not undo the creation.
pub fn submit_create(ctx: &ScreenContext<'_>, input: &ClientFields) -> ApiResult<ClientRecord> {
    let record = ctx.api.create_client(input)?;
    info!(client = %record.id, "client created");

    if let Err(err) = patch_created_client(ctx.cache, &record) {
        warn!(client = %record.id, error = %err, "client list cache not patched");
    }

    ctx.navigator.navigate(Route::ClientList);
    Ok(record)
}

/// Updates the client, confirms to the user, then redirects to the listing.
pub fn submit_update(
    ctx: &ScreenContext<'_>,
    id: &ClientId,
    input: &ClientFields,
) -> ApiResult<ClientFields> {
    let updated = ctx.api.update_client(id, input)?;
    info!(client = %id, "client updated");

    ctx.notifier.notify(&Notice::client_updated());
    ctx.navigator.navigate(Route::ClientList);
    Ok(updated)
}
