use crate::error::CatalogError;
use crate::models::SoftwareDescription;

use super::client::SlClient;

const SOFTWARE_ENDPOINT: &str =
    "SoftLayer_Virtual_Guest_Block_Device_Template_Group/getVhdImportSoftwareDescriptions.json";

/// The OS-description endpoint flakes; retry up to this many attempts,
/// stopping on the first HTTP 200.
const FETCH_ATTEMPTS: u32 = 3;

/// Load the importable OS descriptions.
pub async fn load_software_descriptions(
    client: &SlClient,
) -> Result<Vec<SoftwareDescription>, CatalogError> {
    let mut last_err = CatalogError::Network("no attempt made".to_string());

    for attempt in 1..=FETCH_ATTEMPTS {
        match client.get_raw(SOFTWARE_ENDPOINT, &[]).await {
            Ok((200, body)) => {
                return serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
                    what: "software descriptions",
                    source: e,
                });
            }
            Ok((status, body)) => {
                tracing::warn!(attempt, status, "OS description fetch failed");
                last_err = CatalogError::Api { status, body };
            }
            Err(e) => {
                tracing::warn!(attempt, error = %e, "OS description fetch failed");
                last_err = e;
            }
        }
    }

    Err(last_err)
}
