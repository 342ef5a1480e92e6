use alloc::string::String;

use crate::{
    decode::{DecodeError, Decoder},
    element::Element,
    encode::Encoder,
    escape::{escape, unescape},
    schema::Kind,
};

impl Element for String {
    const KIND: Kind = Kind::Str;

    #[inline(always)]
    fn absent() -> Self {
        String::new()
    }

    #[inline]
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push(&escape(self));
    }

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        Ok(unescape(decoder.next_token()?))
    }
}
