//! Byte-level digit classification for the A=1 … Z=26 code table.

/// True for ASCII '0'..='9'.
#[inline]
#[must_use]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
#[must_use]
pub fn is_zero(b: u8) -> bool {
    b == b'0'
}

/// True when a '0' may follow `a`, i.e. `a0` is one of the codes 10 or 20.
#[inline]
#[must_use]
pub fn accepts_zero(a: u8) -> bool {
    matches!(a, b'1' | b'2')
}

/// True when `ab` decodes two ways: as one letter (11–19, 21–26) or as two.
///
/// 10 and 20 are not ambiguous; the zero can only pair with its predecessor.
#[inline]
#[must_use]
pub fn is_ambiguous_pair(a: u8, b: u8) -> bool {
    match a {
        b'1' => matches!(b, b'1'..=b'9'),
        b'2' => matches!(b, b'1'..=b'6'),
        _ => false,
    }
}
