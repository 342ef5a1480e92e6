use crate::{
    decode::{DecodeError, Decoder},
    element::Element,
    encode::Encoder,
    schema::Kind,
    wire::NULL,
};

impl<T> Element for Option<T>
where
    T: Element,
{
    const KIND: Kind = T::KIND;

    #[inline(always)]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn encode(&self, encoder: &mut Encoder) {
        match self {
            None => encoder.push(NULL),
            Some(value) => value.encode(encoder),
        }
    }

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        if decoder.next_is_null() {
            decoder.skip();
            return Ok(None);
        }
        T::decode(decoder).map(Some)
    }
}
