use decky_state_core::{PublicDeckyState, RenderTarget}; // Import necessary items
use log::info;

/// A render target for the command-line driver.
///
/// There is nothing to redraw on a terminal, so it only logs what a real
/// frontend would repaint.
#[derive(Debug)]
pub struct CliRenderTarget;

impl RenderTarget for CliRenderTarget {
    /// Returns the name of this render target.
    fn name(&self) -> &str {
        "cli"
    }

    fn schedule_redraw(&self, state: &PublicDeckyState) {
        info!(
            "[CLI] Redraw: {} installed plugin(s), active: {}",
            state.installed_plugins.len(),
            state.active_plugin.as_ref().map(|p| p.name.as_str()).unwrap_or("<none>")
        );
    }
}
