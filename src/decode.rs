use alloc::vec::Vec;

use crate::{
    element::Element,
    record::{decode_record, Record},
    wire::{DELIMITER, NULL},
};

/// Error that can occur during decoding.
///
/// [`decode`] collapses all of them into [`DecodeFailure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Schema required a different number of tokens than input contains.
    /// `consumed == available` means the input ran out of tokens,
    /// `consumed < available` means tokens were left over.
    #[error("consumed {consumed} of {available} tokens")]
    TokenCountMismatch { consumed: usize, available: usize },

    /// Token is not a valid radix-36 number or does not fit the type.
    #[error("token {position} is not a valid {kind}")]
    InvalidNumber {
        position: usize,
        kind: &'static str,
    },

    /// No enum variant has the decoded index.
    #[error("token {position} refers to unknown variant {ordinal}")]
    UnknownOrdinal { position: usize, ordinal: i32 },

    /// Token of boolean field is neither `t` nor `f`.
    #[error("token {position} is not a boolean")]
    InvalidBool { position: usize },

    /// Two delimiters in a row or a delimiter at the end of the line.
    #[error("token {position} is empty")]
    EmptyToken { position: usize },
}

/// Opaque decoding failure.
///
/// Decoding is all-or-nothing.
/// Use [`decode_detailed`] to learn the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode record")]
pub struct DecodeFailure;

impl From<DecodeError> for DecodeFailure {
    #[inline(always)]
    fn from(_: DecodeError) -> Self {
        DecodeFailure
    }
}

/// Cursor over tokens of a line.
#[must_use = "Decoder should be used to decode values"]
pub struct Decoder<'de> {
    tokens: Vec<&'de str>,
    cursor: usize,
}

impl<'de> Decoder<'de> {
    /// Splits input into tokens.
    /// Empty input contains no tokens.
    pub fn new(input: &'de str) -> Self {
        let tokens = if input.is_empty() {
            Vec::new()
        } else {
            input.split(DELIMITER).collect()
        };

        Decoder { tokens, cursor: 0 }
    }

    /// Index of the next token.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of tokens not consumed yet.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    #[inline(always)]
    pub fn peek(&self) -> Option<&'de str> {
        self.tokens.get(self.cursor).copied()
    }

    /// Checks if the next token is the null sentinel.
    #[inline(always)]
    pub fn next_is_null(&self) -> bool {
        self.peek() == Some(NULL)
    }

    /// Skips next token.
    #[inline(always)]
    pub fn skip(&mut self) {
        debug_assert!(self.cursor < self.tokens.len());
        self.cursor += 1;
    }

    /// Consumes next token.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TokenCountMismatch`] if there are no tokens left.
    /// Returns [`DecodeError::EmptyToken`] if the token is empty.
    #[inline]
    pub fn next_token(&mut self) -> Result<&'de str, DecodeError> {
        match self.tokens.get(self.cursor) {
            None => Err(DecodeError::TokenCountMismatch {
                consumed: self.cursor,
                available: self.tokens.len(),
            }),
            Some(token) if token.is_empty() => Err(DecodeError::EmptyToken {
                position: self.cursor,
            }),
            Some(&token) => {
                self.cursor += 1;
                Ok(token)
            }
        }
    }

    /// Reads field value.
    ///
    /// Null sentinel yields [`Element::absent`] and consumes one token,
    /// without descending into nested records.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if tokens do not form a valid value.
    #[inline]
    pub fn read<T>(&mut self) -> Result<T, DecodeError>
    where
        T: Element,
    {
        if self.next_is_null() {
            self.skip();
            return Ok(T::absent());
        }
        T::decode(self)
    }

    /// Checks that every token was consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TokenCountMismatch`] if tokens are left over.
    #[inline]
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.cursor == self.tokens.len() {
            Ok(())
        } else {
            Err(DecodeError::TokenCountMismatch {
                consumed: self.cursor,
                available: self.tokens.len(),
            })
        }
    }
}

/// Decodes record from a line of tokens.
///
/// # Errors
///
/// Returns [`DecodeFailure`] if the line does not match the record schema.
/// Cause is reported through `tracing` at debug level.
pub fn decode<R>(input: &str) -> Result<R, DecodeFailure>
where
    R: Record,
{
    decode_detailed(input).map_err(|err| {
        tracing::debug!(schema = R::SCHEMA.name(), error = %err, "failed to decode record");
        DecodeFailure
    })
}

/// Decodes record from a line of tokens reporting the cause of failure.
///
/// # Errors
///
/// Returns [`DecodeError`] if the line does not match the record schema.
pub fn decode_detailed<R>(input: &str) -> Result<R, DecodeError>
where
    R: Record,
{
    let mut decoder = Decoder::new(input);
    let record = decode_record::<R>(&mut decoder)?;
    decoder.finish()?;
    Ok(record)
}
