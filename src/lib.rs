//!
//! Flatline packs nested records into a single line of text tokens.
//! Lines are small enough to travel in one SMS and
//! carry no field names, no type markers and no version.
//! Both peers must know the exact record schema.
//!
//! Leaf values take one token each, nested records expand in place,
//! numbers are written in radix 36 and floats are scaled to fixed precision.
//!
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

// Derived impls refer to `::flatline` paths.
extern crate self as flatline;

mod decode;
mod element;
mod encode;
mod escape;
mod option;
mod primitive;
mod radix;
mod record;
mod schema;
mod string;

pub mod wire;

#[cfg(feature = "derive")]
pub mod messages;

#[cfg(all(test, feature = "derive"))]
mod tests;

pub use self::{
    decode::{decode, decode_detailed, DecodeError, DecodeFailure, Decoder},
    element::{decode_ordinal, encode_ordinal, Element, Ordinal},
    encode::{encode, encode_into, encode_nullable, Encoder},
    escape::{escape, unescape},
    radix::to_radix36,
    record::{decode_record, encode_record, Record},
    schema::{check_fields, resolve_order, Field, Kind, Schema, SchemaError},
};

#[cfg(feature = "derive")]
pub use flatline_proc::{Ordinal, Record};

/// Module containing facilities for macro-generated code.
#[doc(hidden)]
pub mod private {
    pub use {
        crate::{
            decode::{DecodeError, Decoder},
            element::{decode_ordinal, encode_ordinal, Element, Ordinal},
            encode::Encoder,
            record::{decode_record, encode_record, Record},
            schema::{resolve_order, Field, Kind, Schema},
        },
        core::{
            default::Default,
            option::Option::{self, None, Some},
            result::Result::{self, Ok},
        },
    };
}
