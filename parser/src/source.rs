/// A pattern whose characters can be read by index.
///
/// Both the tokenizer and the compiled regex only need indexed access to
/// the characters of the pattern and its length, so anything that can
/// provide those can be used as a pattern source: string slices, owned
/// strings, and slices or vectors of `char`.
///
/// Indices are character indices. For `str` and `String` this means that
/// `char_at(i)` returns the `i`-th Unicode scalar value, not the character
/// at byte offset `i`.
pub trait PatternSource {
    /// Number of characters in the pattern.
    fn len(&self) -> usize;

    /// Returns the character at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is greater than or equal to [`PatternSource::len`].
    fn char_at(&self, index: usize) -> char;

    /// Returns true if the pattern has no characters.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns all the characters in the pattern.
    ///
    /// The default implementation calls [`PatternSource::char_at`] for
    /// every index, types that can do better override it.
    fn to_chars(&self) -> Vec<char> {
        (0..self.len()).map(|i| self.char_at(i)).collect()
    }
}

impl PatternSource for str {
    #[inline]
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn char_at(&self, index: usize) -> char {
        match self.chars().nth(index) {
            Some(c) => c,
            None => panic!("character index {} out of bounds", index),
        }
    }

    fn to_chars(&self) -> Vec<char> {
        self.chars().collect()
    }
}

impl PatternSource for String {
    #[inline]
    fn len(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        PatternSource::char_at(self.as_str(), index)
    }

    fn to_chars(&self) -> Vec<char> {
        self.chars().collect()
    }
}

impl PatternSource for [char] {
    #[inline]
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn to_chars(&self) -> Vec<char> {
        self.to_vec()
    }
}

impl PatternSource for Vec<char> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn to_chars(&self) -> Vec<char> {
        self.clone()
    }
}

impl<T: PatternSource + ?Sized> PatternSource for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        (**self).char_at(index)
    }

    fn to_chars(&self) -> Vec<char> {
        (**self).to_chars()
    }
}
