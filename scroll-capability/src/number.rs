use alloc::string::String;

/// Why a value could not be coerced into a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// An empty (or whitespace-only) string.
    #[error("value is empty")]
    Empty,
    /// Text or structured data that is not a numeric literal.
    #[error("value is not a numeric literal")]
    Invalid,
    /// The value is already a number, but it is NaN.
    #[error("value is NaN")]
    NotANumber,
}

/// Explicit numeric coercion.
///
/// Implementations never panic. Infinite values are valid numbers; NaN never is.
pub trait ToNumber {
    fn to_number(&self) -> Result<f64, NumberError>;
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    fn to_number(&self) -> Result<f64, NumberError> {
        (**self).to_number()
    }
}

impl ToNumber for f64 {
    fn to_number(&self) -> Result<f64, NumberError> {
        if self.is_nan() {
            Err(NumberError::NotANumber)
        } else {
            Ok(*self)
        }
    }
}

impl ToNumber for f32 {
    fn to_number(&self) -> Result<f64, NumberError> {
        f64::from(*self).to_number()
    }
}

macro_rules! impl_to_number_lossy {
    ($($ty:ty),*) => {
        $(
            impl ToNumber for $ty {
                fn to_number(&self) -> Result<f64, NumberError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_to_number_lossy!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToNumber for bool {
    fn to_number(&self) -> Result<f64, NumberError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl ToNumber for str {
    fn to_number(&self) -> Result<f64, NumberError> {
        parse_number(self)
    }
}

impl ToNumber for String {
    fn to_number(&self) -> Result<f64, NumberError> {
        parse_number(self)
    }
}

/// `None` stands for an omitted argument, which counts as `0`.
impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> Result<f64, NumberError> {
        match self {
            Some(v) => v.to_number(),
            None => Ok(0.0),
        }
    }
}

#[cfg(feature = "json")]
impl ToNumber for serde_json::Value {
    fn to_number(&self) -> Result<f64, NumberError> {
        use serde_json::Value;

        match self {
            Value::Null => Err(NumberError::NotANumber),
            Value::Bool(b) => b.to_number(),
            Value::Number(n) => n.as_f64().ok_or(NumberError::Invalid),
            Value::String(s) => parse_number(s),
            Value::Array(_) | Value::Object(_) => Err(NumberError::Invalid),
        }
    }
}

/// Parses a numeric literal the way a scroll offset arrives from loosely typed sources.
///
/// Accepted forms (after trimming whitespace and U+FEFF byte order marks):
/// - decimal literals with optional sign, fraction and exponent (`"-1.5e3"`, `".5"`, `"3."`)
/// - unsigned `0x`/`0o`/`0b` integer literals
/// - `"Infinity"`, `"+Infinity"`, `"-Infinity"`
///
/// Anything else, including Rust-only spellings such as `"inf"` or `"NaN"`, is rejected.
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Err(NumberError::Empty);
    }

    match s {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(radix_result) = parse_radix_literal(s) {
        return radix_result;
    }

    // `f64::from_str` also understands `inf`/`infinity`/`nan`; the exponent marker is the only
    // letter a decimal literal may contain.
    if s
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return Err(NumberError::Invalid);
    }

    s.parse::<f64>().map_err(|_| NumberError::Invalid)
}

fn parse_radix_literal(s: &str) -> Option<Result<f64, NumberError>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(Err(NumberError::Invalid));
    }
    Some(
        u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .map_err(|_| NumberError::Invalid),
    )
}

/// Coerces `value` into a number, falling back to `default` when it is not one.
///
/// An omitted value (`None`) is `0`, not `default`.
///
/// ```
/// use scroll_capability::check_number;
///
/// assert_eq!(check_number("3.5", 0.0), 3.5);
/// assert_eq!(check_number("abc", 5.0), 5.0);
/// assert_eq!(check_number(None::<f64>, 5.0), 0.0);
/// ```
pub fn check_number(value: impl ToNumber, default: f64) -> f64 {
    match value.to_number() {
        Ok(n) if !n.is_nan() => n,
        _ => default,
    }
}

/// [`check_number`] with a fallback of `0`.
pub fn check_number_or_zero(value: impl ToNumber) -> f64 {
    check_number(value, 0.0)
}
