use crate::{
    decode::{DecodeError, Decoder},
    element::Element,
    encode::Encoder,
    schema::Schema,
};

/// Trait for structures flattened field by field.
///
/// Field indices used by this trait are declaration indices
/// in [`Schema::fields`].
/// Traversal order is taken from [`Schema::order`] on both paths,
/// so implementations only dispatch by index.
///
/// Users should `derive(Record)`.
/// Manual implementations must build `SCHEMA` with
/// [`resolve_order`](crate::resolve_order).
pub trait Record: Element {
    const SCHEMA: Schema;

    /// Appends tokens of the field with specified index.
    fn encode_field(&self, index: usize, encoder: &mut Encoder);

    /// Reads the field with specified index.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if tokens do not form a valid value.
    fn decode_field(&mut self, index: usize, decoder: &mut Decoder<'_>)
        -> Result<(), DecodeError>;
}

/// Appends tokens of every field in traversal order.
/// Nested records are expanded in place.
#[inline]
pub fn encode_record<R>(record: &R, encoder: &mut Encoder)
where
    R: Record,
{
    for &index in R::SCHEMA.order() {
        record.encode_field(index, encoder);
    }
}

/// Reads every field in traversal order into a fresh record.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered.
/// Partially decoded record is dropped.
#[inline]
pub fn decode_record<R>(decoder: &mut Decoder<'_>) -> Result<R, DecodeError>
where
    R: Record,
{
    let mut record = R::absent();
    for &index in R::SCHEMA.order() {
        record.decode_field(index, decoder)?;
    }
    Ok(record)
}
