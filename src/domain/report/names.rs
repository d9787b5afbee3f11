//! Display-name resolution for monitored objects.

use tracing::warn;

use crate::core::client::dms::DmsClient;
use crate::errors::ReportError;

/// Resolves a `(agent, object, is_service)` identity to a display name
/// by asking the backend for element or service metadata.
///
/// An object the backend no longer knows gets an id-based placeholder
/// label instead of failing the whole report; transport failures still
/// fail the request.
pub struct NameResolver<'a, C: DmsClient + ?Sized> {
    dms: &'a C,
}

impl<'a, C: DmsClient + ?Sized> NameResolver<'a, C> {
    pub fn new(dms: &'a C) -> Self {
        NameResolver { dms }
    }

    pub async fn display_name(
        &self,
        agent_id: i32,
        object_id: i32,
        is_service: bool,
    ) -> Result<String, ReportError> {
        let looked_up = if is_service {
            self.dms
                .service_info(agent_id, object_id)
                .await
                .map(|info| info.name)
        } else {
            self.dms
                .element_info(agent_id, object_id)
                .await
                .map(|info| info.name)
        };

        match looked_up {
            Ok(name) => Ok(name),
            Err(ReportError::NotFound(_)) => {
                warn!(agent_id, object_id, is_service, "name lookup missed, using placeholder");
                Ok(Self::placeholder(agent_id, object_id, is_service))
            }
            Err(err) => Err(err),
        }
    }

    fn placeholder(agent_id: i32, object_id: i32, is_service: bool) -> String {
        if is_service {
            format!("Service {agent_id}/{object_id}")
        } else {
            format!("Element {agent_id}/{object_id}")
        }
    }
}
