use super::RestoreCoordinator;
use crate::error::ReanimateError;
use crate::inflect::singularize;
use crate::model::ModelAccessor;
use crate::routing::Redirector;
use std::sync::Arc;
use tracing::debug;

const CONTROLLER_WORD: &str = "Controller";

/// Short name of a type, without module path or generic arguments.
///
/// `short_type_name::<app::http::UserController>()` is `"UserController"`.
#[must_use]
pub fn short_type_name<T: ?Sized>() -> &'static str {
    short_name(std::any::type_name::<T>())
}

fn short_name(path: &str) -> &str {
    let base = path.split('<').next().unwrap_or(path);
    base.rsplit("::").next().unwrap_or(base)
}

/// Remove the last occurrence of `"Controller"` (case-sensitive, at most once).
#[must_use]
pub fn strip_controller(name: &str) -> String {
    match name.rfind(CONTROLLER_WORD) {
        Some(at) => {
            let (head, tail) = name.split_at(at);
            let rest = tail.strip_prefix(CONTROLLER_WORD).unwrap_or(tail);
            format!("{head}{rest}")
        }
        None => name.to_string(),
    }
}

/// Model name a controller restores by convention: `CategoriesController`
/// becomes `Category`.
#[must_use]
pub fn infer_model_name(controller: &str) -> String {
    singularize(&strip_controller(short_name(controller)))
}

impl<R: Redirector> RestoreCoordinator<R> {
    /// Find the model accessor for a controller.
    ///
    /// A configured model wins; otherwise the name is inferred with
    /// [`infer_model_name`]. Either way the model must be registered.
    pub fn resolve_model_accessor(
        &self,
        controller_type_name: &str,
    ) -> Result<Arc<dyn ModelAccessor>, ReanimateError> {
        let controller = short_name(controller_type_name);
        let model = match self.settings.model() {
            Some(model) => {
                debug!(controller, model, "Using configured undo model");
                model.to_string()
            }
            None => {
                let model = infer_model_name(controller);
                debug!(controller, model = %model, "Inferred undo model from controller name");
                model
            }
        };
        self.registry
            .get(&model)
            .ok_or_else(|| ReanimateError::model_not_found(controller, model))
    }
}
