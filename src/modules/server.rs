//! The app server module.
//!
//! Loading it resolves the server settings and exports them. Nothing is
//! bound or started; listening is the server binary's job.

use serde_json::{json, Value};

use super::LoadContext;
use crate::config::Config;
use crate::error::ModuleLoadError;

/// Name the server module is registered under.
pub const MODULE_NAME: &str = "server";

/// Initialize the server module and build its exports.
pub fn init(ctx: &LoadContext) -> Result<Value, ModuleLoadError> {
    let config = Config::load_from(&ctx.base_dir).map_err(|e| ModuleLoadError::Init {
        module: MODULE_NAME.to_string(),
        message: e.to_string(),
    })?;

    Ok(json!({
        "name": MODULE_NAME,
        "host": config.server.host,
        "port": config.server.port,
    }))
}
