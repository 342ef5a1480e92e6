
use alloc::string::{String, ToString};

use crate::{
    decode, decode_detailed, encode, encode_into, encode_nullable, DecodeError, DecodeFailure,
    Element, Kind, Ordinal, Record,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Ordinal)]
enum E {
    Abc,
    Def,
    Ghi,
}

#[derive(Debug, PartialEq, Record)]
struct Single {
    a: f32,
}

#[derive(Debug, PartialEq, Record)]
struct C {
    #[flatline(order = 0)]
    a: f32,
    #[flatline(order = 1)]
    b: f64,
    #[flatline(skip)]
    cached: u8,
}

#[derive(Debug, PartialEq, Record)]
struct B {
    #[flatline(order = 0)]
    a: i32,
    #[flatline(order = 1)]
    b: i64,
    #[flatline(order = 2)]
    c: Option<C>,
}

#[derive(Debug, PartialEq, Record)]
struct A {
    #[flatline(order = 0)]
    a: Option<Single>,
    #[flatline(order = 1)]
    b: Option<B>,
    #[flatline(order = 2)]
    c: Option<String>,
    #[flatline(order = 3)]
    d: Option<String>,
    #[flatline(order = 4)]
    e: Option<String>,
    #[flatline(order = 5)]
    f: Option<String>,
    #[flatline(order = 6)]
    g: Option<String>,
    #[flatline(order = 7)]
    h: Option<String>,
    #[flatline(order = 8)]
    i: Option<String>,
    #[flatline(order = 9)]
    j: Option<E>,
}

#[derive(Debug, PartialEq, Record)]
struct OnlyEnum {
    e: E,
}

#[derive(Debug, PartialEq, Record)]
struct Ordered {
    #[flatline(order = 0)]
    a: i32,
    #[flatline(order = 2)]
    b: i32,
    #[flatline(order = 1)]
    c: i32,
}

#[derive(Debug, PartialEq, Record)]
struct Unordered {
    a: i32,
    b: i32,
    c: i32,
}

#[derive(Debug, PartialEq, Record)]
struct Shuffled {
    c: i32,
    a: i32,
    #[flatline(order = 5)]
    z: i32,
    b: i32,
}

#[derive(Debug, PartialEq, Record)]
struct Strings {
    #[flatline(order = 0)]
    a: Option<String>,
    #[flatline(order = 1)]
    b: Option<String>,
    #[flatline(order = 2)]
    c: Option<String>,
    #[flatline(order = 3)]
    d: Option<String>,
}

#[derive(Debug, PartialEq, Record)]
struct Flags {
    on: bool,
    off: Option<bool>,
}

fn sample() -> A {
    A {
        a: None,
        b: Some(B {
            a: 123,
            b: 123_456_789,
            c: Some(C {
                a: 123.123_123,
                b: 123.123_123_123_1,
                cached: 7,
            }),
        }),
        c: Some("string".to_string()),
        d: Some("*".to_string()),
        e: Some(" a b c d e   f g h ".to_string()),
        f: None,
        g: Some("t".to_string()),
        h: Some("f".to_string()),
        i: Some(String::new()),
        j: Some(E::Def),
    }
}

#[test]
fn test_nested() {
    let a = sample();
    let encoded = encode(&a);
    assert_eq!(
        encoded,
        "* 3f 21i3v9 21ayeo fpmbaa67 string ** _a_b_c_d_e_____f_g_h_ * t f ; 1"
    );

    let decoded = decode::<A>(&encoded).unwrap();
    assert_eq!(encode(&decoded), encoded);

    assert_eq!(decoded.a, None);
    assert_eq!(decoded.e.as_deref(), Some(" a b c d e   f g h "));
    assert_eq!(decoded.i.as_deref(), Some(""));
    assert_eq!(decoded.j, Some(E::Def));

    let b = decoded.b.unwrap();
    assert_eq!((b.a, b.b), (123, 123_456_789));

    // Skipped fields are not on the line.
    assert_eq!(b.c.unwrap().cached, 0);
}

#[test]
fn test_null_input() {
    assert_eq!(encode_nullable::<A>(None), "");
    assert_eq!(encode_nullable(Some(&sample())), encode(&sample()));
}

#[test]
fn test_decode_errors() {
    assert_eq!(decode::<A>(""), Err(DecodeFailure));
    assert_eq!(
        decode_detailed::<A>(""),
        Err(DecodeError::TokenCountMismatch {
            consumed: 0,
            available: 0
        })
    );

    // Runs out inside nested `C`.
    assert_eq!(
        decode_detailed::<A>("1 2 3 2"),
        Err(DecodeError::TokenCountMismatch {
            consumed: 4,
            available: 4
        })
    );

    assert_eq!(
        decode_detailed::<Ordered>("1 2 3 2"),
        Err(DecodeError::TokenCountMismatch {
            consumed: 3,
            available: 4
        })
    );
    assert_eq!(decode::<C>("1 2 1"), Err(DecodeFailure));

    assert_eq!(
        decode_detailed::<OnlyEnum>("100"),
        Err(DecodeError::UnknownOrdinal {
            position: 0,
            ordinal: 1296
        })
    );
    assert_eq!(
        decode_detailed::<OnlyEnum>("-1"),
        Err(DecodeError::UnknownOrdinal {
            position: 0,
            ordinal: -1
        })
    );
    assert_eq!(decode::<OnlyEnum>("2"), Ok(OnlyEnum { e: E::Ghi }));
}

#[test]
fn test_numeric_errors() {
    assert_eq!(
        decode_detailed::<Ordered>("1 2 !"),
        Err(DecodeError::InvalidNumber {
            position: 2,
            kind: "i32"
        })
    );

    // Fits `i64` but not `i32`.
    assert_eq!(
        decode_detailed::<Ordered>("1 2 zzzzzzz"),
        Err(DecodeError::InvalidNumber {
            position: 2,
            kind: "i32"
        })
    );

    assert_eq!(
        decode_detailed::<Single>("1.5"),
        Err(DecodeError::InvalidNumber {
            position: 0,
            kind: "f32"
        })
    );
}

#[test]
fn test_malformed_lines() {
    assert_eq!(
        decode_detailed::<Ordered>("1  2"),
        Err(DecodeError::EmptyToken { position: 1 })
    );
    assert_eq!(
        decode_detailed::<Ordered>("1 2 3 "),
        Err(DecodeError::TokenCountMismatch {
            consumed: 3,
            available: 4
        })
    );
    assert_eq!(
        decode_detailed::<Flags>("yes *"),
        Err(DecodeError::InvalidBool { position: 0 })
    );
}

#[test]
fn test_order() {
    let ordered = Ordered { a: 0, b: 2, c: 1 };
    assert_eq!(encode(&ordered), "0 1 2");
    assert_eq!(decode::<Ordered>("0 1 2"), Ok(ordered));

    let unordered = Unordered { a: 0, b: 2, c: 1 };
    assert_eq!(encode(&unordered), "0 2 1");
    assert_eq!(decode::<Unordered>("0 2 1"), Ok(unordered));

    // Explicit order first, then by name regardless of declaration.
    let shuffled = Shuffled {
        c: 3,
        a: 1,
        z: 26,
        b: 2,
    };
    assert_eq!(encode(&shuffled), "q 1 2 3");
}

#[test]
fn test_empty_string() {
    let strings = Strings {
        a: None,
        b: Some(String::new()),
        c: Some(";".to_string()),
        d: Some(";;".to_string()),
    };

    let encoded = encode(&strings);
    assert_eq!(encoded, "* ; ;; ;;;;");

    let decoded = decode::<Strings>(&encoded).unwrap();
    assert_eq!(decoded, strings);
    assert_eq!(encode(&decoded), encoded);
}

#[test]
fn test_float_precision() {
    let c = C {
        a: 123.123,
        b: 123.123,
        cached: 0,
    };

    let encoded = encode(&c);
    assert_eq!(encoded, "21aybc fpmajw5c");

    let decoded = decode::<C>(&encoded).unwrap();
    assert!((decoded.a - 123.123).abs() < 1e-4);
    assert!((decoded.b - 123.123).abs() < 1e-9);
    assert_eq!(encode(&decoded), encoded);
}

#[test]
fn test_null_leaves() {
    let flags = Flags {
        on: true,
        off: None,
    };
    assert_eq!(encode(&flags), "* t");
    assert_eq!(decode::<Flags>("* t"), Ok(flags));

    // Null token on a non-nullable field yields its zero value.
    assert_eq!(
        decode::<Flags>("f *"),
        Ok(Flags {
            on: false,
            off: Some(false),
        })
    );
    assert_eq!(
        decode::<Flags>("* *"),
        Ok(Flags {
            on: false,
            off: None
        })
    );
}

#[test]
fn test_null_composite_takes_one_token() {
    let b = B { a: -1, b: -36, c: None };
    let encoded = encode(&b);
    assert_eq!(encoded, "-1 -10 *");
    assert_eq!(decode::<B>(&encoded), Ok(b));
}

#[test]
fn test_encode_into() {
    let mut line = String::from("0");
    encode_into(&Ordered { a: 1, b: 3, c: 2 }, &mut line);
    assert_eq!(line, "0 1 2 3");

    let mut line = String::new();
    encode_into(&Ordered { a: 1, b: 3, c: 2 }, &mut line);
    assert_eq!(line, "1 2 3");
}

#[test]
fn test_schema() {
    let schema = A::SCHEMA;
    assert_eq!(schema.name(), "A");
    assert_eq!(schema.fields().len(), 10);
    assert_eq!(schema.token_count(), 13);

    match B::SCHEMA.fields()[2].kind {
        Kind::Record(nested) => assert_eq!(nested.name(), "C"),
        kind => panic!("unexpected kind {kind:?}"),
    }

    match <E as Element>::KIND {
        Kind::Enum(variants) => assert_eq!(variants, ["Abc", "Def", "Ghi"]),
        kind => panic!("unexpected kind {kind:?}"),
    }

    assert_eq!(E::Ghi.ordinal(), 2);
    assert_eq!(E::from_ordinal(3), None);

    // `cached` is skipped.
    assert_eq!(C::SCHEMA.fields().len(), 2);

    let names: alloc::vec::Vec<_> = Shuffled::SCHEMA
        .ordered()
        .map(|(_, field)| field.name)
        .collect();
    assert_eq!(names, ["z", "a", "b", "c"]);
}
