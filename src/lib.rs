// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod coordinator;
pub mod error;
pub mod inflect;
pub mod logging;
pub mod model;
pub mod routing;

// Re-export commonly used types
pub use config::{load_config, ConfigError, ControllerSettings, ReanimateConfig};
pub use coordinator::{short_type_name, RestoreCoordinator, UndoLink, UndoPayload};
pub use error::ReanimateError;
pub use model::{
    InMemoryModel, ModelAccessor, ModelError, ModelRecord, ModelRegistry, PrimaryKey, Record,
};
pub use routing::{FlashRedirector, RedirectInstruction, Redirector, FLASH_MESSAGE_KEY};
