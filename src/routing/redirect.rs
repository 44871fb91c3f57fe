use super::{Redirector, FLASH_MESSAGE_KEY};
use crate::model::PrimaryKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A redirect to a named route with its flash data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectInstruction {
    pub route: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<PrimaryKey>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flash: BTreeMap<String, String>,
}

impl RedirectInstruction {
    #[must_use]
    pub fn flash(&self, key: &str) -> Option<&str> {
        self.flash.get(key).map(String::as_str)
    }

    /// The status message flashed by a restore.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.flash(FLASH_MESSAGE_KEY)
    }
}

/// Router that produces plain [`RedirectInstruction`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashRedirector;

impl Redirector for FlashRedirector {
    type Redirect = RedirectInstruction;

    fn to_route(&self, route: &str, params: &[PrimaryKey]) -> RedirectInstruction {
        RedirectInstruction {
            route: route.to_string(),
            params: params.to_vec(),
            flash: BTreeMap::new(),
        }
    }

    fn with_flash(
        &self,
        mut redirect: RedirectInstruction,
        key: &str,
        value: &str,
    ) -> RedirectInstruction {
        redirect.flash.insert(key.to_string(), value.to_string());
        redirect
    }
}
