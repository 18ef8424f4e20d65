//! Main TUI runner - entry point and event loop

use portal_app::Engine;
use portal_client::PortalApi;
use portal_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Must be called from inside a tokio runtime: the engine spawns its
/// request, timer and clipboard tasks onto it.
pub fn run<A>(mut engine: Engine<A>) -> Result<()>
where
    A: PortalApi + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    info!("Starting TUI against {}", engine.state.server_url);
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop: drain background messages, draw, then wait for input
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: PortalApi + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
