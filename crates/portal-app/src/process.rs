//! Message processing
//!
//! Runs a message and its follow-ups through `update()`, executing every
//! returned action before the next message is handled.

use portal_client::PortalApi;

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(state: &mut AppState, message: Message, ctx: &mut ActionContext<'_, A>)
where
    A: PortalApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        msg = result.message;
    }

    // The controller is the source of truth for the indicator
    state.polling_active = ctx.poller.is_polling();
}
