use std::io::{self, Write};

/// Prints status lines, skipping a line identical to the one printed just before it.
pub struct Notifier<W: Write> {
    out: W,
    /// Starts empty, so an empty first message is treated as a repeat.
    last_message: String,
}

impl Notifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Notifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_message: String::new(),
        }
    }

    /// Returns true if the message was printed.
    pub fn show(&mut self, message: &str) -> bool {
        if self.last_message == message {
            return false;
        }

        if let Err(e) = writeln!(self.out, "{}", message).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write status line: {}", e);
        }
        self.last_message = message.to_string();
        true
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}
