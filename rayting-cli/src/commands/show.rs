use rayting_client::ClientError;

use super::{Session, fetch_store, runtime};
use crate::display::{Describe, print_details};
use crate::error::CliError;
use crate::spinner::spinner;

/// Show one item, fetched from the backend or looked up in the cache.
pub(crate) fn run_show<T: Describe>(
    session: &mut Session,
    id: i64,
    offline: bool,
) -> Result<(), CliError> {
    let config = T::config();
    let collection = config.collection;
    let not_found = || CliError::NotFound {
        collection: collection.singular().to_lowercase(),
        id,
    };

    let item: T = if offline {
        let store = fetch_store::<T>(session, true)?;
        store
            .items()
            .iter()
            .find(|i| i.id() == id)
            .cloned()
            .ok_or_else(not_found)?
    } else {
        let client = session.client()?;
        let rt = runtime()?;
        let pb = spinner(format!("Fetching {} {}...", collection.singular(), id), session.quiet);
        let result = rt.block_on(client.get_item::<T>(collection, id));
        pb.finish_and_clear();
        match result {
            Ok(item) => item,
            Err(ClientError::NotFound) => return Err(not_found()),
            Err(e) => return Err(e.into()),
        }
    };

    print_details(&config, &item);
    Ok(())
}
