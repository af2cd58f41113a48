//! String-to-value coercion for resolved environment values

use std::borrow::Cow;

use crate::error::Error;

/// Converts resolved environment strings into typed field values.
///
/// A `Decoder` belongs to one [`Config`](crate::Config) and carries that
/// configuration's list separator. All scalar conversions are
/// separator-independent; list conversions split on it.
#[derive(Debug, Clone)]
pub struct Decoder {
    pub(crate) separator: String,
}

impl Decoder {
    pub(crate) fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Decode `raw` into `slot`.
    ///
    /// The slot keeps its previous value when decoding fails.
    pub fn decode<T: Decode>(&self, slot: &mut T, raw: &str) -> Result<(), Error> {
        *slot = T::decode(self, raw)?;
        Ok(())
    }

    /// The separator used to split list values.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

/// Conversion of a resolved environment string into a value of `Self`.
///
/// Implemented for `bool`, `String`, the signed and unsigned integer types,
/// `f32`/`f64`, and compositionally for `Option<T>`, `Box<T>`, `Vec<T>` and
/// `[T; N]` over any implementor.
pub trait Decode: Sized {
    /// Decode `raw`, splitting lists on the decoder's separator.
    fn decode(d: &Decoder, raw: &str) -> Result<Self, Error>;
}

impl Decode for bool {
    fn decode(_: &Decoder, raw: &str) -> Result<Self, Error> {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Ok(true),
            "0" | "f" | "false" => Ok(false),
            _ => Err(Error::parse::<bool>(raw, "unrecognized boolean literal")),
        }
    }
}

impl Decode for String {
    fn decode(_: &Decoder, raw: &str) -> Result<Self, Error> {
        Ok(raw.to_string())
    }
}

/// Split an integer literal into parser input and radix, honoring `0x`,
/// `0o`, `0b` and legacy leading-zero octal. The sign stays attached to the
/// returned literal so minimum values parse without overflow.
fn int_literal(raw: &str) -> (Cow<'_, str>, u32) {
    let (sign, body) = match raw.as_bytes().first() {
        Some(b'+') => ("+", &raw[1..]),
        Some(b'-') => ("-", &raw[1..]),
        _ => ("", raw),
    };
    let (digits, radix) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (d, 16)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (d, 8)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (d, 2)
    } else if body.len() > 1 && body.starts_with('0') {
        (&body[1..], 8)
    } else {
        (body, 10)
    };
    if radix == 10 {
        (Cow::Borrowed(raw), 10)
    } else {
        (Cow::Owned(format!("{}{}", sign, digits)), radix)
    }
}

macro_rules! decode_int {
    ($($ty:ty)*) => {$(
        impl Decode for $ty {
            fn decode(_: &Decoder, raw: &str) -> Result<Self, Error> {
                let (literal, radix) = int_literal(raw);
                <$ty>::from_str_radix(&literal, radix).map_err(|e| Error::parse::<$ty>(raw, e))
            }
        }
    )*};
}

decode_int!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

macro_rules! decode_float {
    ($($ty:ty)*) => {$(
        impl Decode for $ty {
            fn decode(_: &Decoder, raw: &str) -> Result<Self, Error> {
                raw.parse::<$ty>().map_err(|e| Error::parse::<$ty>(raw, e))
            }
        }
    )*};
}

decode_float!(f32 f64);

impl<T: Decode> Decode for Option<T> {
    fn decode(d: &Decoder, raw: &str) -> Result<Self, Error> {
        T::decode(d, raw).map(Some)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(d: &Decoder, raw: &str) -> Result<Self, Error> {
        T::decode(d, raw).map(Box::new)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(d: &Decoder, raw: &str) -> Result<Self, Error> {
        raw.split(d.separator.as_str())
            .map(|part| T::decode(d, part))
            .collect()
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(d: &Decoder, raw: &str) -> Result<Self, Error> {
        let items = Vec::<T>::decode(d, raw)?;
        let got = items.len();
        items.try_into().map_err(|_| Error::InvalidLength {
            expected: N,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> Decoder {
        Decoder::new(",")
    }

    #[test]
    fn test_decode_bool_literals() {
        let d = decoder();
        for raw in ["true", "TRUE", "True", "t", "T", "1"] {
            assert!(bool::decode(&d, raw).unwrap(), "{raw}");
        }
        for raw in ["false", "FALSE", "False", "f", "F", "0"] {
            assert!(!bool::decode(&d, raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn test_decode_bool_invalid() {
        let d = decoder();
        assert!(matches!(
            bool::decode(&d, "yes"),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(bool::decode(&d, ""), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_decode_string_verbatim() {
        let d = decoder();
        assert_eq!(String::decode(&d, "hello world").unwrap(), "hello world");
        assert_eq!(String::decode(&d, "").unwrap(), "");
        assert_eq!(String::decode(&d, " padded ").unwrap(), " padded ");
    }

    #[test]
    fn test_decode_int_decimal() {
        let d = decoder();
        assert_eq!(i32::decode(&d, "42").unwrap(), 42);
        assert_eq!(i32::decode(&d, "-17").unwrap(), -17);
        assert_eq!(i32::decode(&d, "+10").unwrap(), 10);
        assert_eq!(i32::decode(&d, "0").unwrap(), 0);
    }

    #[test]
    fn test_decode_int_base_prefixes() {
        let d = decoder();
        assert_eq!(i32::decode(&d, "0x1A").unwrap(), 26);
        assert_eq!(i32::decode(&d, "0X1a").unwrap(), 26);
        assert_eq!(i32::decode(&d, "-0xff").unwrap(), -255);
        assert_eq!(i32::decode(&d, "0o17").unwrap(), 15);
        assert_eq!(i32::decode(&d, "017").unwrap(), 15);
        assert_eq!(i32::decode(&d, "0b101").unwrap(), 5);
        assert_eq!(u32::decode(&d, "0x10").unwrap(), 16);
    }

    #[test]
    fn test_decode_int_min_with_hex_prefix() {
        let d = decoder();
        assert_eq!(
            i64::decode(&d, "-0x8000000000000000").unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_decode_int_errors() {
        let d = decoder();
        assert!(matches!(i8::decode(&d, "128"), Err(Error::Parse { .. })));
        assert!(matches!(u8::decode(&d, "300"), Err(Error::Parse { .. })));
        assert!(matches!(u32::decode(&d, "-1"), Err(Error::Parse { .. })));
        assert!(matches!(i32::decode(&d, "abc"), Err(Error::Parse { .. })));
        assert!(matches!(i32::decode(&d, ""), Err(Error::Parse { .. })));
        assert!(matches!(i32::decode(&d, "0x"), Err(Error::Parse { .. })));
        assert!(matches!(i32::decode(&d, "08"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_decode_float() {
        let d = decoder();
        assert_eq!(f64::decode(&d, "-0.1").unwrap(), -0.1);
        assert_eq!(f64::decode(&d, "1e3").unwrap(), 1000.0);
        assert_eq!(f32::decode(&d, "2.5").unwrap(), 2.5);
        assert!(matches!(f64::decode(&d, "abc"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_decode_vec() {
        let d = decoder();
        assert_eq!(Vec::<i64>::decode(&d, "0,1").unwrap(), vec![0, 1]);
        assert_eq!(
            Vec::<f64>::decode(&d, "-0.1,0.1").unwrap(),
            vec![-0.1, 0.1]
        );
        assert_eq!(
            Vec::<String>::decode(&d, "a,,b").unwrap(),
            vec!["a", "", "b"]
        );
    }

    #[test]
    fn test_decode_vec_of_empty_string() {
        // Splitting the empty string yields one empty segment.
        let d = decoder();
        assert_eq!(Vec::<String>::decode(&d, "").unwrap(), vec![""]);
    }

    #[test]
    fn test_decode_vec_custom_separator() {
        let d = Decoder::new(";");
        assert_eq!(
            Vec::<String>::decode(&d, "a;b").unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            Vec::<String>::decode(&d, "a,b").unwrap(),
            vec!["a,b"]
        );
    }

    #[test]
    fn test_decode_vec_element_failure_aborts() {
        let d = decoder();
        assert!(matches!(
            Vec::<i32>::decode(&d, "1,x,3"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_decode_indirection() {
        let d = decoder();
        assert_eq!(Option::<String>::decode(&d, "v").unwrap(), Some("v".to_string()));
        assert_eq!(*Box::<u16>::decode(&d, "8080").unwrap(), 8080);
        assert_eq!(
            Option::<Vec<u32>>::decode(&d, "1,2").unwrap(),
            Some(vec![1, 2])
        );
    }

    #[test]
    fn test_decode_array() {
        let d = decoder();
        assert_eq!(<[u8; 3]>::decode(&d, "1,2,3").unwrap(), [1, 2, 3]);
        assert!(matches!(
            <[u8; 3]>::decode(&d, "1,2"),
            Err(Error::InvalidLength {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_decoder_writes_slot() {
        let d = decoder();
        let mut port = 0u16;
        d.decode(&mut port, "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_decoder_keeps_slot_on_failure() {
        let d = decoder();
        let mut port = 81u16;
        assert!(d.decode(&mut port, "no").is_err());
        assert_eq!(port, 81);
    }
}
