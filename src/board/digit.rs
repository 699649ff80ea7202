use std::fmt;
use std::num::NonZeroU8;

// defined separately from the index types because it has an offset
/// A digit that can be entered in a cell of the grid.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Parses a digit character. `'0'` is not a digit and maps to `None`.
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => Some(Digit::new(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the number contained within as `usize`, offset by `-1`. Guarantees that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    pub(crate) fn to_char(self) -> char {
        (b'0' + self.get()) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_range() {
        assert!(Digit::new_checked(0).is_none());
        assert!(Digit::new_checked(10).is_none());
        for num in 1..=9 {
            assert_eq!(Digit::new_checked(num).map(Digit::get), Some(num));
        }
    }

    #[test]
    fn all_digits_ascending() {
        assert!(Digit::all().map(Digit::get).eq(1..=9));
    }

    #[test]
    fn char_conversions() {
        assert_eq!(Digit::from_char('7'), Some(Digit::new(7)));
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('.'), None);
        assert_eq!(Digit::new(3).to_char(), '3');
    }
}
