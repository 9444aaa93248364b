//! Console message sink
//!
//! Stands in for the chat host: direct messages and ephemeral replies are
//! rendered as plain text on a writer (stdout for the binary).

use std::{
    io::{self, Write},
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use application::{ApplicationError, MessageSinkPort};
use async_trait::async_trait;
use domain::{BotIdentity, DirectMessage, MessageField, Post, UserId};
use tracing::{debug, warn};

/// Message sink printing to a writer
pub struct ConsoleMessageSink<W = io::Stdout> {
    bot: BotIdentity,
    out: Mutex<W>,
    posted: AtomicU64,
}

impl<W> std::fmt::Debug for ConsoleMessageSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleMessageSink")
            .field("bot", &self.bot.username)
            .field("posted", &self.posted.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl ConsoleMessageSink {
    /// Sink writing to stdout
    pub fn stdout(bot: BotIdentity) -> Self {
        Self::new(bot, io::stdout())
    }
}

impl<W: Write + Send> ConsoleMessageSink<W> {
    pub fn new(bot: BotIdentity, out: W) -> Self {
        Self {
            bot,
            out: Mutex::new(out),
            posted: AtomicU64::new(0),
        }
    }

    /// Consume the sink and return its writer
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self, text: &str) -> Result<(), ApplicationError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::Internal("console lock poisoned".to_string()))?;
        writeln!(out, "{text}")
            .and_then(|()| out.flush())
            .map_err(|e| ApplicationError::Delivery(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send> MessageSinkPort for ConsoleMessageSink<W> {
    async fn post_direct_message(
        &self,
        recipient: &UserId,
        message: DirectMessage,
    ) -> Result<Post, ApplicationError> {
        self.write(&render_direct_message(&self.bot, recipient, &message))?;

        let n = self.posted.fetch_add(1, Ordering::Relaxed) + 1;
        let post = Post {
            id: format!("console-{n}"),
            channel_id: direct_channel_name(&self.bot.user_id, recipient),
        };
        debug!(post_id = %post.id, "Direct message printed");
        Ok(post)
    }

    async fn post_ephemeral(&self, recipient: &UserId, text: &str) {
        if let Err(e) = self.write(&format!("(only visible to {recipient}) {text}")) {
            warn!(error = %e, "Failed to print ephemeral reply");
        }
    }
}

/// Name of the direct channel between two users
///
/// The lexically smaller ID comes first, so both sides agree on the name.
pub fn direct_channel_name(a: &UserId, b: &UserId) -> String {
    let (first, second) = if a.as_str() <= b.as_str() { (a, b) } else { (b, a) };
    format!("{first}__{second}")
}

/// Render a direct message as plain text
pub fn render_direct_message(bot: &BotIdentity, recipient: &UserId, message: &DirectMessage) -> String {
    let mut lines = vec![format!(
        "{} ({}) -> {recipient}",
        bot.display_name,
        bot.mention()
    )];

    if !message.text.is_empty() {
        lines.push(message.text.clone());
    }
    if let Some(title) = &message.title {
        lines.push(format!("## {title}"));
    }
    lines.extend(message.fields.iter().map(render_field));

    lines.join("\n")
}

fn render_field(field: &MessageField) -> String {
    if field.title.is_empty() {
        return field.value.clone();
    }
    if field.value.contains('\n') {
        let body = field
            .value
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        return format!("{}:\n{body}", field.title);
    }
    format!("{}: {}", field.title, field.value)
}
