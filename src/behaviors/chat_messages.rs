use std::time::Duration;

use tracing::warn;

use super::{Behavior, BehaviorContext};
use crate::config::ChatMessagesConfig;
use crate::runner::timer::TimerId;

/// Scripted chat. Non-repeat mode sends every configured message once, in
/// order, at activation and never creates a timer. Repeat mode cycles
/// through the list at a fixed interval forever, wrapping the index.
pub struct ChatMessages {
    config: ChatMessagesConfig,
    timer: Option<TimerId>,
    next_index: usize,
}

impl ChatMessages {
    pub fn new(config: ChatMessagesConfig) -> Self {
        Self {
            config,
            timer: None,
            next_index: 0,
        }
    }
}

impl Behavior for ChatMessages {
    fn id(&self) -> &'static str {
        "chat_messages"
    }

    fn name(&self) -> &'static str {
        "chat-messages"
    }

    fn on_start(&mut self, ctx: &mut BehaviorContext) {
        if self.config.messages.is_empty() {
            warn!(target: "behaviors", "chat-messages enabled with an empty message list");
            return;
        }

        if self.config.repeat {
            let interval = Duration::from_secs(self.config.repeat_delay_secs);
            self.timer = Some(ctx.schedule_every(interval, "chat_messages"));
        } else {
            for message in &self.config.messages {
                ctx.session().chat(message);
            }
        }
    }

    fn on_tick(&mut self, ctx: &mut BehaviorContext) {
        let Some(timer) = self.timer else {
            return;
        };

        if ctx.fired(timer) {
            let message = self.config.messages[self.next_index].clone();
            ctx.session().chat(&message);
            self.next_index = (self.next_index + 1) % self.config.messages.len();
        }
    }
}
