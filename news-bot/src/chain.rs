//! # Handler chain
//!
//! Ordered command handlers for incoming chat messages. Each handler is asked in turn; the first
//! [`HandlerResponse::Reply`] ends dispatch, `Ignore` and `Continue` pass the message on. The poll
//! pipeline never goes through here.

use std::sync::Arc;

use newsbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

fn handler_name(handler: &Arc<dyn Handler>) -> &'static str {
    std::any::type_name_of_val(handler.as_ref())
}

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append. A catch-all such as the unknown-command handler goes last.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// First Reply in chain order; Continue when nobody answers.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(command = ?message.command(), handlers = self.len(), "Dispatching message");

        for handler in &self.handlers {
            let response = handler.handle(message).await?;
            debug!(handler = handler_name(handler), response = ?response, "Handled");
            if let HandlerResponse::Reply(_) = response {
                info!(handler = handler_name(handler), "Message answered");
                return Ok(response);
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
