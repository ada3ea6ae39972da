//! app-smoke: boot smoke test
//!
//! Checks that the app's basic invariants hold and that the server module
//! loads, then exits 0 on success or 1 on the first failure.
//!
//! ## Configuration
//! - APP_SMOKE_LOG: tracing filter (default: warn)
//! - APP_CONFIG: config file for the server module (optional)
//! - APP__SERVER__HOST / APP__SERVER__PORT: server setting overrides

use std::io;
use std::process::ExitCode;

use tracing::info;

use app_smoke::modules::{LoadContext, ModuleRegistry};
use app_smoke::runner::Reporter;
use app_smoke::suite::boot_checks;
use app_smoke::utils::bootstrap::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let registry = ModuleRegistry::with_builtins();
    let ctx = LoadContext::default();
    info!(base_dir = %ctx.base_dir.display(), "app-smoke started");

    let mut reporter = Reporter::new(io::stdout().lock(), io::stderr().lock());
    let outcome = boot_checks(&registry, &ctx).run(&mut reporter);

    ExitCode::from(&outcome)
}
