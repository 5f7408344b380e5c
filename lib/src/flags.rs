// Items generated by `bitmask!` have no docs.
#![allow(missing_docs)]

use bitmask::bitmask;

bitmask! {
    /// Grammar and matching options for a [`crate::Regex`].
    ///
    /// The options are accepted and stored with the compiled regex, but the
    /// engine only implements the basic grammar with case-sensitive,
    /// single-line, full-string matching, so they don't change how patterns
    /// are parsed or matched.
    #[derive(Debug)]
    pub mask Flags: u16 where
    /// Each of the options that can be set in [`Flags`].
    flags Flag {
        ICase = 0x0001,
        NoSubs = 0x0002,
        Optimize = 0x0004,
        Collate = 0x0008,
        Multiline = 0x0010,
        EcmaScript = 0x0020,
        Basic = 0x0040,
        Extended = 0x0080,
        Awk = 0x0100,
        Grep = 0x0200,
        Egrep = 0x0400,
    }
}

impl Flags {
    /// Flags used by [`crate::Regex::new`]: basic grammar and nothing else.
    pub fn basic() -> Self {
        Flag::Basic.into()
    }

    /// Returns the grammar selected by these flags, if any.
    ///
    /// When more than one grammar is selected, the first one in the order
    /// `EcmaScript`, `Basic`, `Extended`, `Awk`, `Grep`, `Egrep` wins.
    pub fn grammar(&self) -> Option<Flag> {
        [
            Flag::EcmaScript,
            Flag::Basic,
            Flag::Extended,
            Flag::Awk,
            Flag::Grep,
            Flag::Egrep,
        ]
        .into_iter()
        .find(|grammar| self.contains(*grammar))
    }
}

#[cfg(test)]
mod tests {
    use super::{Flag, Flags};

    #[test]
    fn grammar() {
        assert!(matches!(Flags::basic().grammar(), Some(Flag::Basic)));
        assert!(Flags::none().grammar().is_none());

        let mut flags = Flags::basic();
        flags.set(Flag::ICase);
        flags.set(Flag::EcmaScript);

        assert!(flags.contains(Flag::ICase));
        assert!(matches!(flags.grammar(), Some(Flag::EcmaScript)));
    }
}
