use warikan_application::MessageProcessor;
use warikan_domain::{EventId, PayerId};
use warikan_presentation::{OutcomePresenter, format_process_error};

/// One chat message as it arrives on stdin.
#[derive(Debug, PartialEq, Eq)]
pub struct IncomingMessage<'a> {
    pub event_id: &'a str,
    pub payer_id: &'a str,
    pub text: &'a str,
}

/// Splits `<event> <payer> <text>`; the text may be empty.
pub fn split_line(line: &str) -> Option<IncomingMessage<'_>> {
    let line = line.trim();
    let (event_id, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (payer_id, text) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    Some(IncomingMessage {
        event_id,
        payer_id,
        text: text.trim(),
    })
}

/// Strips the slash command; `None` when the text is addressed to something else.
pub fn strip_command<'a>(text: &'a str, command: &str) -> Option<&'a str> {
    let args = text.strip_prefix(command)?;
    if args.is_empty() || args.starts_with(char::is_whitespace) {
        Some(args.trim())
    } else {
        None
    }
}

pub struct ConsoleHandler<'a> {
    command: String,
    processor: MessageProcessor<'a>,
}

impl<'a> ConsoleHandler<'a> {
    pub fn new(command: String, processor: MessageProcessor<'a>) -> Self {
        Self { command, processor }
    }

    /// Returns the reply to print, or `None` when the line is not for us.
    pub fn handle_line(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }
        let Some(message) = split_line(line) else {
            tracing::warn!(line, "Malformed input line, expected `<event> <payer> <text>`");
            return None;
        };
        let Some(args) = strip_command(message.text, &self.command) else {
            tracing::debug!(event_id = message.event_id, "Ignoring message without command");
            return None;
        };

        let event_id = EventId::new(message.event_id);
        let payer_id = PayerId::new(message.payer_id);
        let body = match self
            .processor
            .process(event_id.clone(), payer_id.clone(), args)
        {
            Ok(outcome) => OutcomePresenter::render(&outcome),
            Err(err) => {
                tracing::warn!(%event_id, %payer_id, "Command failed: {err}");
                format_process_error(&err, format!("<@{payer_id}>"))
            }
        };
        Some(format!("[{event_id}] {body}"))
    }
}
