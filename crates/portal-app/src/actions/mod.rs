//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use portal_client::PortalApi;

use crate::clipboard::ClipboardWriter;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::polling::PollingController;

pub(crate) mod local;
pub(crate) mod requests;

/// Everything an action may touch outside `AppState`
pub struct ActionContext<'a, A> {
    pub msg_tx: &'a mpsc::Sender<Message>,
    pub api: &'a Arc<A>,
    pub clipboard: &'a Arc<dyn ClipboardWriter>,
    pub poller: &'a mut PollingController,
}

/// Execute an action, spawning background tasks where it needs I/O
pub fn handle_action<A>(action: UpdateAction, ctx: &mut ActionContext<'_, A>)
where
    A: PortalApi + Sync + 'static,
{
    let msg_tx = ctx.msg_tx.clone();
    match action {
        UpdateAction::FetchSubmissions { request_id } => {
            requests::spawn_fetch_submissions(Arc::clone(ctx.api), msg_tx, request_id);
        }

        UpdateAction::CheckSubmission {
            request_id,
            content,
        } => {
            requests::spawn_check_submission(Arc::clone(ctx.api), msg_tx, request_id, content);
        }

        UpdateAction::ValidateBeforeSubmit { content } => {
            requests::spawn_validate_before_submit(Arc::clone(ctx.api), msg_tx, content);
        }

        UpdateAction::SubmitContent { content } => {
            requests::spawn_submit(Arc::clone(ctx.api), msg_tx, content);
        }

        UpdateAction::StartPolling => ctx.poller.start(msg_tx),

        UpdateAction::StopPolling => {
            ctx.poller.stop();
        }

        UpdateAction::CopyToClipboard {
            block,
            text,
            generation,
        } => {
            local::spawn_clipboard_write(Arc::clone(ctx.clipboard), msg_tx, block, text, generation);
        }

        UpdateAction::ScheduleCopyReset {
            block,
            generation,
            after,
        } => {
            local::spawn_copy_reset(msg_tx, block, generation, after);
        }

        UpdateAction::LoadContentFile { path } => {
            local::spawn_load_content(msg_tx, path);
        }
    }
}
