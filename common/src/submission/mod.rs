//! Posting the form state and reporting the outcome.
//!
//! A submission goes Idle -> Sending -> Idle. While sending, the submit
//! control is disabled; it is enabled again whatever the outcome. The
//! disabled control is the only guard against a second submit.

use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};
use log::{info, warn};
use serde_json::Value;

use crate::config::Endpoint;
use crate::requests::{SubmitError, SubmitOutcome, SubmitRequest};
use crate::sync::FormStateSync;
use crate::ui::{FormEvents, StateDisplay, SubmitFeedback, Transport};

/// Sends `body` to the endpoint once and decodes the answer.
///
/// Any status outside 2xx is an error regardless of the body.
pub async fn send_form_state<T: Transport>(
    transport: &T,
    endpoint: &Endpoint,
    body: String,
) -> Result<SubmitOutcome, SubmitError> {
    let reply = transport
        .post(SubmitRequest {
            url: endpoint.url.clone(),
            csrf_token: endpoint.csrf_token.clone(),
            body,
        })
        .await?;

    if !reply.is_ok() {
        return Err(SubmitError::Status(reply.status));
    }

    let response: Value = serde_json::from_str(&reply.body).map_err(SubmitError::Decode)?;
    let redirect = reply.redirected.then_some(reply.url);
    Ok(SubmitOutcome { response, redirect })
}

pub struct SubmissionController<D, F, T> {
    sync: Rc<FormStateSync<D>>,
    endpoint: Endpoint,
    feedback: F,
    transport: T,
}

impl<D, F, T> SubmissionController<D, F, T>
where
    D: StateDisplay,
    F: SubmitFeedback,
    T: Transport,
{
    pub fn new(sync: Rc<FormStateSync<D>>, endpoint: Endpoint, feedback: F, transport: T) -> Self {
        Self {
            sync,
            endpoint,
            feedback,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Runs one submission attempt, driving the submit control and the user
    /// notifications around it. The result is returned for the caller's
    /// benefit only; the user has already been told.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let body = self.begin();
        self.finish(body).await
    }

    /// Synchronous half of a submission: disables the control, renders the
    /// state and serializes it. Runs inside the submit event, so the control
    /// is disabled before the handler returns.
    fn begin(&self) -> Result<String, SubmitError> {
        self.feedback.set_submit_enabled(false);
        info!("submitting form state to {}", self.endpoint.url);

        self.sync.render().map_err(SubmitError::Encode)?;
        self.sync
            .state()
            .borrow()
            .to_json()
            .map_err(SubmitError::Encode)
    }

    async fn finish(&self, body: Result<String, SubmitError>) -> Result<SubmitOutcome, SubmitError> {
        let result = match body {
            Ok(body) => send_form_state(&self.transport, &self.endpoint, body).await,
            Err(err) => Err(err),
        };
        match &result {
            Ok(outcome) => {
                self.feedback.alert(&outcome.message());
                if let Some(url) = &outcome.redirect {
                    info!("server redirected to {}", url);
                    self.feedback.navigate(url);
                }
            }
            Err(err) => {
                warn!("form submission failed: {}", err);
                self.feedback.alert(&err.to_string());
            }
        }

        self.feedback.set_submit_enabled(true);
        result
    }
}

impl<D, F, T> SubmissionController<D, F, T>
where
    D: StateDisplay + 'static,
    F: SubmitFeedback + 'static,
    T: Transport + 'static,
{
    /// Subscribes to submit events. The control is disabled within the event
    /// itself; the request and its outcome run as a task handed to `spawn`.
    pub fn attach<E, S>(self: &Rc<Self>, events: &E, spawn: S)
    where
        E: FormEvents,
        S: Fn(LocalBoxFuture<'static, ()>) + 'static,
    {
        let controller = Rc::clone(self);
        events.on_submit(Box::new(move || {
            let controller = Rc::clone(&controller);
            let body = controller.begin();
            spawn(
                async move {
                    let _ = controller.finish(body).await;
                }
                .boxed_local(),
            );
        }));
    }
}
