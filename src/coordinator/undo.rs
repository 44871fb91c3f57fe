use super::RestoreCoordinator;
use crate::inflect::lcfirst;
use crate::model::{PrimaryKey, Record};
use crate::routing::Redirector;
use serde::Serialize;

/// Flash data telling the view how to offer an undo for a delete.
///
/// Serializes as `{"undo": {"route": .., "params": [..], "lang": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoPayload {
    undo: UndoLink,
}

/// Body of an [`UndoPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoLink {
    route: String,
    params: Vec<PrimaryKey>,
    lang: String,
}

impl UndoPayload {
    pub fn undo(&self) -> &UndoLink {
        &self.undo
    }

    pub fn route(&self) -> &str {
        self.undo.route()
    }

    pub fn params(&self) -> &[PrimaryKey] {
        self.undo.params()
    }

    pub fn lang(&self) -> &str {
        self.undo.lang()
    }
}

impl UndoLink {
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Route parameters: exactly the deleted record's primary key.
    pub fn params(&self) -> &[PrimaryKey] {
        &self.params
    }

    /// Localization key for the undo prompt.
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl<R: Redirector> RestoreCoordinator<R> {
    /// Undo route for a model: explicit argument, then configured route, then
    /// `<lcfirst model>Undo`.
    fn undo_route_for(&self, model_name: &str, explicit: Option<&str>) -> String {
        explicit
            .filter(|route| !route.is_empty())
            .or_else(|| self.settings.undo_route())
            .map_or_else(|| format!("{}Undo", lcfirst(model_name)), str::to_string)
    }

    /// Build the undo flash data for a record that was just deleted.
    ///
    /// Route overrides never affect the `lang` key.
    pub fn build_undo_payload<T: Record + ?Sized>(
        &self,
        record: &T,
        undo_route: Option<&str>,
    ) -> UndoPayload {
        let model_name = record.model_name();
        UndoPayload {
            undo: UndoLink {
                route: self.undo_route_for(model_name, undo_route),
                params: vec![record.key()],
                lang: format!("{}.undo.message", model_name.to_lowercase()),
            },
        }
    }
}
