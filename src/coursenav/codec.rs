//! # Codecs
//!
//! A codec is a pure, two-way mapping between a raw query value and a typed,
//! domain-valid value. Codecs know nothing about URLs, keys or defaults: they
//! are handed a string and either produce a valid value or report invalidity
//! by returning `None`. Binding a codec to a key and a default is the job of
//! [`crate::state::Param`].
//!
//! Every codec upholds two laws:
//!
//! - **Totality**: `decode` never panics, whatever the input.
//! - **Round-trip**: for every valid `v`, `decode(&encode(&v)) == Some(v)`.
//!
//! ## Provided codecs
//!
//! | Codec             | Value            | Valid raw input                       |
//! |-------------------|------------------|---------------------------------------|
//! | [`StringCodec`]   | `String`         | anything                              |
//! | [`IntegerCodec`]  | `i64`            | strict base-10 integer                |
//! | [`BoundedIntCodec`] | `i64`          | strict base-10 integer in `[min, max]`|
//! | [`IndexCodec`]    | `usize`          | position `>= origin`                  |
//! | [`EnumCodec`]     | `E: QueryEnum`   | exact variant string                  |
//! | [`Nullable`]      | `Option<C::Value>` | empty string, or valid for `C`      |

use std::fmt;
use std::marker::PhantomData;

/// First valid lesson day.
pub const MIN_DAY: i64 = 1;
/// Last valid lesson day.
pub const MAX_DAY: i64 = 50;

pub trait Codec {
    type Value: Clone + PartialEq + fmt::Debug;

    /// Decodes a raw query value. `None` means the input is invalid.
    fn decode(&self, raw: &str) -> Option<Self::Value>;

    /// Encodes a valid value into its canonical raw form.
    fn encode(&self, value: &Self::Value) -> String;
}

/// Parses a strict base-10 integer: optional sign followed by ASCII digits only.
///
/// `str::parse::<i64>` already rejects whitespace, fractions and exponents;
/// this just keeps the accepted grammar explicit in one place.
fn parse_decimal(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCodec;

impl Codec for StringCodec {
    type Value = String;

    fn decode(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }

    fn encode(&self, value: &String) -> String {
        value.clone()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerCodec;

impl Codec for IntegerCodec {
    type Value = i64;

    fn decode(&self, raw: &str) -> Option<i64> {
        parse_decimal(raw)
    }

    fn encode(&self, value: &i64) -> String {
        value.to_string()
    }
}

/// An integer restricted to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedIntCodec {
    min: i64,
    max: i64,
}

impl BoundedIntCodec {
    pub fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "empty range {min}..={max}");
        Self { min, max }
    }

    /// The lesson `day` field: `1..=50`.
    pub fn day() -> Self {
        Self::new(MIN_DAY, MAX_DAY)
    }

    /// Page numbers and page sizes: `1..`.
    pub fn positive() -> Self {
        Self::new(1, i64::MAX)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Codec for BoundedIntCodec {
    type Value = i64;

    fn decode(&self, raw: &str) -> Option<i64> {
        parse_decimal(raw).filter(|n| self.contains(*n))
    }

    fn encode(&self, value: &i64) -> String {
        value.to_string()
    }
}

/// A position in a sequence, written on the wire relative to `origin`.
///
/// With origin 0 the wire form is the zero-based index (`picture=0` is the
/// first picture); with origin 1 it is one-based (`day=1` is the first day).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCodec {
    origin: usize,
}

impl IndexCodec {
    pub fn zero_based() -> Self {
        Self { origin: 0 }
    }

    pub fn one_based() -> Self {
        Self { origin: 1 }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }
}

impl Codec for IndexCodec {
    type Value = usize;

    fn decode(&self, raw: &str) -> Option<usize> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: usize = raw.parse().ok()?;
        n.checked_sub(self.origin)
    }

    fn encode(&self, value: &usize) -> String {
        value.saturating_add(self.origin).to_string()
    }
}

/// A closed set of string variants usable in a query.
///
/// `VARIANTS` is the full set; `as_str` must be injective over it.
pub trait QueryEnum: Copy + PartialEq + fmt::Debug + 'static {
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;
}

/// Case-sensitive exact match against `E::VARIANTS`.
pub struct EnumCodec<E> {
    _variants: PhantomData<E>,
}

impl<E: QueryEnum> EnumCodec<E> {
    pub fn new() -> Self {
        Self {
            _variants: PhantomData,
        }
    }
}

impl<E: QueryEnum> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        Self {
            _variants: PhantomData,
        }
    }
}

impl<E> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumCodec")
            .field("variants", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: QueryEnum> Codec for EnumCodec<E> {
    type Value = E;

    fn decode(&self, raw: &str) -> Option<E> {
        E::VARIANTS.iter().copied().find(|v| v.as_str() == raw)
    }

    fn encode(&self, value: &E) -> String {
        value.as_str().to_string()
    }
}

/// Wraps a codec for an optional field: the empty string stands for "unset".
///
/// Used with a `None` default, the key simply disappears from the URL when
/// the field is cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullable<C>(pub C);

impl<C: Codec> Codec for Nullable<C> {
    type Value = Option<C::Value>;

    fn decode(&self, raw: &str) -> Option<Self::Value> {
        if raw.is_empty() {
            return Some(None);
        }
        self.0.decode(raw).map(Some)
    }

    fn encode(&self, value: &Self::Value) -> String {
        match value {
            Some(inner) => self.0.encode(inner),
            None => String::new(),
        }
    }
}
