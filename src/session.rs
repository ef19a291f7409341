use crate::ai::ChatBackend;
use crate::state::{Action, PendingRequest};
use futures::StreamExt;

/// Stream one request through `backend`, reporting progress as actions.
///
/// Fragments are dispatched in arrival order, followed by exactly one of
/// `StreamFinished` or `StreamFailed`. Reading stops at the first error.
pub async fn run_request<B, F>(backend: &B, request: &PendingRequest, mut dispatch: F)
where
    B: ChatBackend + ?Sized,
    F: FnMut(Action),
{
    tracing::info!(model = %request.model, "starting completion");

    let mut stream = match backend
        .stream_completion(&request.model, &request.messages)
        .await
    {
        Ok(stream) => stream,
        Err(err) => {
            tracing::error!("error opening completion stream: {err}");
            dispatch(Action::StreamFailed(err.to_string()));
            return;
        }
    };

    let mut received = 0usize;
    while let Some(item) = stream.next().await {
        match item {
            Ok(piece) => {
                received += piece.len();
                dispatch(Action::Fragment(piece));
            }
            Err(err) => {
                tracing::error!("error in streaming chat completion: {err}");
                dispatch(Action::StreamFailed(err.to_string()));
                return;
            }
        }
    }

    tracing::info!(bytes = received, "completion finished");
    dispatch(Action::StreamFinished);
}
