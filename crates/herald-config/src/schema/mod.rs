//! Configuration schema types for Herald.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistants;
mod completion;
mod logging;

pub use assistants::*;
pub use completion::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Herald.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HeraldConfig {
    pub completion: CompletionConfig,
    pub email: EmailConfig,
    pub news: NewsConfig,
    pub logging: LoggingConfig,
}
