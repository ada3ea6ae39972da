//! The boot smoke suite.

use crate::error::Result;
use crate::modules::{server, LoadContext, ModuleLoader};
use crate::runner::Runner;

pub const BASIC_TEST: &str = "Basic test";
pub const MATH_WORKS: &str = "Math works";
pub const SERVER_MODULE_LOADS: &str = "Server module loads";

/// Build the fixed boot sequence: sanity, arithmetic, then the server module.
pub fn boot_checks<'a>(loader: &'a dyn ModuleLoader, ctx: &'a LoadContext) -> Runner<'a> {
    Runner::new()
        .check(BASIC_TEST, || Ok(true))
        .check(MATH_WORKS, || Ok(1 + 1 == 2))
        .check(SERVER_MODULE_LOADS, move || {
            module_supports_field_access(loader, server::MODULE_NAME, ctx)
        })
}

/// Load `name` and report whether its exports can be indexed by key.
///
/// A load failure is an error, not `false`.
pub fn module_supports_field_access(
    loader: &dyn ModuleLoader,
    name: &str,
    ctx: &LoadContext,
) -> Result<bool> {
    let module = loader.load(name, ctx)?;
    Ok(module.supports_field_access())
}
