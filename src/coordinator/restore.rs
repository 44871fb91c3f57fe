use super::RestoreCoordinator;
use crate::error::ReanimateError;
use crate::inflect::lcfirst;
use crate::model::{ModelAccessor, PrimaryKey};
use crate::routing::{Redirector, FLASH_MESSAGE_KEY};
use tracing::{info, warn};

/// Flash message key for a restore outcome, e.g. `user.undo.restored`.
///
/// Uses the fully lowercased model name, unlike route names.
fn status_message(model_name: &str, outcome: &str) -> String {
    format!("{}.undo.{outcome}", model_name.to_lowercase())
}

impl<R: Redirector> RestoreCoordinator<R> {
    /// Index route for a model: explicit argument, then configured route, then
    /// `<lcfirst model>Index`.
    fn index_route_for(&self, model_name: &str, explicit: Option<&str>) -> String {
        explicit
            .filter(|route| !route.is_empty())
            .or_else(|| self.settings.index_route())
            .map_or_else(|| format!("{}Index", lcfirst(model_name)), str::to_string)
    }

    /// Restore a soft-deleted record if it exists and redirect to the index
    /// route with a status message.
    ///
    /// The identifier is coerced to an integer before the lookup (see
    /// [`PrimaryKey::coerce_to_int`]). A missing record yields the
    /// `<model>.undo.invalid` message rather than an error.
    pub async fn restore_or_report(
        &self,
        record_id: &PrimaryKey,
        accessor: &dyn ModelAccessor,
        index_route: Option<&str>,
    ) -> Result<R::Redirect, ReanimateError> {
        let model_name = accessor.model_name();
        let route = self.index_route_for(model_name, index_route);
        let key = PrimaryKey::Int(record_id.coerce_to_int());

        let outcome = match accessor.find_with_trashed(&key).await? {
            Some(record) => {
                accessor.restore(&record).await?;
                info!(model = %model_name, key = %key, route = %route, "Undo restored record");
                "restored"
            }
            None => {
                warn!(
                    model = %model_name,
                    key = %key,
                    requested = %record_id,
                    "Undo requested for unknown record"
                );
                "invalid"
            }
        };

        let redirect = self.redirector.to_route(&route, &[]);
        Ok(self.redirector.with_flash(
            redirect,
            FLASH_MESSAGE_KEY,
            &status_message(model_name, outcome),
        ))
    }
}
