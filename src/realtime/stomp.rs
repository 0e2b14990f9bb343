//! Minimal STOMP 1.2 frame codec.
//!
//! Only the subscribe-side subset the statistics broker speaks: CONNECT,
//! CONNECTED, SUBSCRIBE, MESSAGE, ERROR. Frames travel as WebSocket text
//! messages; a lone newline is a heartbeat and is not a frame.

use thiserror::Error;

/// A single STOMP frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame is missing its command line")]
    MissingCommand,
    #[error("malformed header line: {0}")]
    MalformedHeader(String),
    #[error("frame is missing the NUL terminator")]
    MissingTerminator,
}

impl Frame {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Append a header, builder-style.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the frame body, builder-style.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// First header with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serialize to wire text: command line, headers, blank line, body, NUL.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 64);
        out.push_str(&self.command);
        out.push('\n');
        for (name, value) in &self.headers {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body);
        out.push('\0');
        out
    }

    /// Parse one frame from wire text.
    pub fn decode(raw: &str) -> Result<Self, FrameError> {
        let raw = raw.strip_suffix('\0').ok_or(FrameError::MissingTerminator)?;
        let (head, body) = raw.split_once("\n\n").unwrap_or((raw, ""));

        let mut lines = head.lines();
        let command = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or(FrameError::MissingCommand)?
            .to_string();

        let mut headers = Vec::new();
        for line in lines {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| FrameError::MalformedHeader(line.to_string()))?;
            headers.push((name.to_string(), value.to_string()));
        }

        Ok(Self {
            command,
            headers,
            body: body.to_string(),
        })
    }

    /// Connection handshake frame.
    pub fn connect(host: &str) -> Self {
        Frame::new("CONNECT")
            .header("accept-version", "1.2")
            .header("host", host)
    }

    /// Topic subscription frame.
    pub fn subscribe(id: &str, destination: &str) -> Self {
        Frame::new("SUBSCRIBE")
            .header("id", id)
            .header("destination", destination)
    }
}
