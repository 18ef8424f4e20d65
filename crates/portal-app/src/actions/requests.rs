//! Portal requests run off the event loop.
//!
//! Each task performs one call and reports back with exactly one message.
//! Errors are converted to [`RequestFailure`] so they can cross the channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use portal_client::PortalApi;
use portal_core::prelude::*;
use portal_core::{RequestFailure, RequestId};

use crate::message::Message;

pub(super) fn spawn_fetch_submissions<A>(
    api: Arc<A>,
    msg_tx: mpsc::Sender<Message>,
    request_id: RequestId,
) where
    A: PortalApi + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api.list_submissions().await.map_err(RequestFailure::from);
        if msg_tx
            .send(Message::SubmissionsLoaded { request_id, result })
            .await
            .is_err()
        {
            debug!("Engine gone before submissions {} arrived", request_id);
        }
    });
}

pub(super) fn spawn_check_submission<A>(
    api: Arc<A>,
    msg_tx: mpsc::Sender<Message>,
    request_id: RequestId,
    content: String,
) where
    A: PortalApi + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api
            .check_submission(&content)
            .await
            .map_err(RequestFailure::from);
        let _ = msg_tx
            .send(Message::ValidationCompleted { request_id, result })
            .await;
    });
}

/// Validation step of the submit flow.
///
/// The submission request is only issued after this result has been handled,
/// so validation always completes before the submit call starts.
pub(super) fn spawn_validate_before_submit<A>(
    api: Arc<A>,
    msg_tx: mpsc::Sender<Message>,
    content: String,
) where
    A: PortalApi + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api
            .check_submission(&content)
            .await
            .map_err(RequestFailure::from);
        let _ = msg_tx
            .send(Message::SubmitValidationCompleted { result })
            .await;
    });
}

pub(super) fn spawn_submit<A>(api: Arc<A>, msg_tx: mpsc::Sender<Message>, content: String)
where
    A: PortalApi + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Submitting {} bytes", content.len());
        let result = api.submit(&content).await.map_err(RequestFailure::from);
        let _ = msg_tx.send(Message::SubmitCompleted { result }).await;
    });
}
