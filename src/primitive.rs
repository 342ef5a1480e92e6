use crate::{
    decode::{DecodeError, Decoder},
    element::Element,
    encode::Encoder,
    radix::{parse_f32, parse_f64, parse_i32, parse_i64, scale_f32, scale_f64, to_radix36},
    schema::Kind,
    wire::{FALSE, TRUE},
};

impl Element for bool {
    const KIND: Kind = Kind::Bool;

    #[inline(always)]
    fn absent() -> Self {
        false
    }

    #[inline]
    fn encode(&self, encoder: &mut Encoder) {
        encoder.push(if *self { TRUE } else { FALSE });
    }

    #[inline]
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        match decoder.next_token()? {
            TRUE => Ok(true),
            FALSE => Ok(false),
            _ => Err(DecodeError::InvalidBool {
                position: decoder.position() - 1,
            }),
        }
    }
}

macro_rules! impl_numeric {
    ($ty:ty, $kind:ident, $to:expr, $from:expr) => {
        impl Element for $ty {
            const KIND: Kind = Kind::$kind;

            #[inline(always)]
            fn absent() -> Self {
                <$ty>::default()
            }

            #[inline]
            fn encode(&self, encoder: &mut Encoder) {
                encoder.push(&to_radix36($to(*self)));
            }

            #[inline]
            fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
                let token = decoder.next_token()?;
                match $from(token) {
                    Some(value) => Ok(value),
                    None => Err(DecodeError::InvalidNumber {
                        position: decoder.position() - 1,
                        kind: stringify!($ty),
                    }),
                }
            }
        }
    };
}

impl_numeric!(i32, I32, i64::from, parse_i32);
impl_numeric!(i64, I64, core::convert::identity, parse_i64);
impl_numeric!(f32, F32, scale_f32, parse_f32);
impl_numeric!(f64, F64, scale_f64, parse_f64);
