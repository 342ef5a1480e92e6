use alloc::string::String;

use crate::{
    record::{encode_record, Record},
    wire::DELIMITER,
};

/// Collects tokens into a single line.
#[derive(Debug, Default)]
#[must_use = "Encoder should be finished to get the encoded line"]
pub struct Encoder {
    output: String,
    tokens: usize,
}

impl Encoder {
    #[inline(always)]
    pub fn new() -> Self {
        Encoder::default()
    }

    /// Continues line in existing buffer.
    /// First token is delimited from the buffer content unless the buffer is empty.
    #[inline(always)]
    pub fn with_output(output: String) -> Self {
        Encoder { output, tokens: 0 }
    }

    /// Appends single token.
    ///
    /// Token must be non-empty and must not contain the delimiter.
    #[inline]
    pub fn push(&mut self, token: &str) {
        debug_assert!(!token.is_empty(), "empty token");
        debug_assert!(!token.contains(DELIMITER), "token contains delimiter");

        if !self.output.is_empty() {
            self.output.push(DELIMITER);
        }
        self.output.push_str(token);
        self.tokens += 1;
    }

    /// Number of tokens pushed so far.
    #[inline(always)]
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    #[inline(always)]
    pub fn finish(self) -> String {
        self.output
    }
}

/// Encodes record into a line of tokens.
#[must_use]
pub fn encode<R>(record: &R) -> String
where
    R: Record,
{
    let mut encoder = Encoder::new();
    encode_record(record, &mut encoder);
    tracing::trace!(
        schema = R::SCHEMA.name(),
        tokens = encoder.tokens(),
        "record encoded"
    );
    encoder.finish()
}

/// Encodes optional record.
/// Absent record produces empty line.
#[must_use]
pub fn encode_nullable<R>(record: Option<&R>) -> String
where
    R: Record,
{
    match record {
        None => String::new(),
        Some(record) => encode(record),
    }
}

/// Encodes record appending tokens to the `output`.
pub fn encode_into<R>(record: &R, output: &mut String)
where
    R: Record,
{
    let mut encoder = Encoder::with_output(core::mem::take(output));
    encode_record(record, &mut encoder);
    *output = encoder.finish();
}
