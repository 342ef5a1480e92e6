use crate::{
    decode::{DecodeError, Decoder},
    encode::Encoder,
    radix::{parse_i32, to_radix36},
    schema::Kind,
};

/// Trait for values that occupy tokens on the line.
///
/// Leaf values occupy exactly one token.
/// Records occupy as many tokens as their schema requires.
///
/// Implementations are provided for `bool`, `i32`, `i64`, `f32`, `f64`,
/// `String` and `Option<T>`.
/// Users should `derive(Record)` for structures
/// and `derive(Ordinal)` for field-less enums.
pub trait Element: Sized {
    /// Kind recorded in schema of records containing this element.
    const KIND: Kind;

    /// Value assigned to a field whose token is [`NULL`](crate::wire::NULL).
    fn absent() -> Self;

    /// Appends tokens of the value.
    fn encode(&self, encoder: &mut Encoder);

    /// Consumes tokens of the value.
    ///
    /// Null sentinel is handled by the record walker
    /// before this method is called.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if tokens do not form a valid value.
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError>;
}

/// Trait for field-less enums.
/// Variants are encoded by index in declaration order.
pub trait Ordinal: Sized {
    /// Variant names in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Index of the variant in declaration order.
    fn ordinal(&self) -> usize;

    /// Returns variant with specified index.
    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

/// Appends index of the variant as single token.
#[inline]
pub fn encode_ordinal<T>(value: &T, encoder: &mut Encoder)
where
    T: Ordinal,
{
    // Variant count is far below `i64::MAX`.
    encoder.push(&to_radix36(value.ordinal() as i64));
}

/// Reads index of the variant and finds matching variant.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidNumber`] if the token is not a number
/// and [`DecodeError::UnknownOrdinal`] if no variant has that index.
#[inline]
pub fn decode_ordinal<T>(decoder: &mut Decoder<'_>) -> Result<T, DecodeError>
where
    T: Ordinal,
{
    let token = decoder.next_token()?;
    let position = decoder.position() - 1;

    let ordinal = parse_i32(token).ok_or(DecodeError::InvalidNumber {
        position,
        kind: "ordinal",
    })?;

    usize::try_from(ordinal)
        .ok()
        .and_then(T::from_ordinal)
        .ok_or(DecodeError::UnknownOrdinal { position, ordinal })
}
