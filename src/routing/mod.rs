//! Router collaborator: building redirects and attaching flash messages.

mod redirect;

pub use redirect::{FlashRedirector, RedirectInstruction};

use crate::model::PrimaryKey;

/// Session flash key carrying the restore status message.
pub const FLASH_MESSAGE_KEY: &str = "message";

/// The host router, as seen by the coordinator.
///
/// The coordinator never inspects a [`Redirector::Redirect`]; it only passes
/// back what the router produced.
pub trait Redirector: Send + Sync {
    type Redirect;

    /// Redirect to a named route.
    fn to_route(&self, route: &str, params: &[PrimaryKey]) -> Self::Redirect;

    /// Attach a flash value to a redirect.
    fn with_flash(&self, redirect: Self::Redirect, key: &str, value: &str) -> Self::Redirect;
}
