use bitflags::bitflags;

bitflags! {
    /// The nine permission bits of a POSIX file mode.
    ///
    /// File type and setuid/setgid/sticky bits are dropped on conversion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeBits: u32 {
        const USER_READ   = 0o400;
        const USER_WRITE  = 0o200;
        const USER_EXEC   = 0o100;
        const GROUP_READ  = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC  = 0o010;
        const OTHER_READ  = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC  = 0o001;
    }
}

/// Rendering order: owner, group, other; read, write, execute within each.
const SYMBOLS: [(ModeBits, char); 9] = [
    (ModeBits::USER_READ, 'r'),
    (ModeBits::USER_WRITE, 'w'),
    (ModeBits::USER_EXEC, 'x'),
    (ModeBits::GROUP_READ, 'r'),
    (ModeBits::GROUP_WRITE, 'w'),
    (ModeBits::GROUP_EXEC, 'x'),
    (ModeBits::OTHER_READ, 'r'),
    (ModeBits::OTHER_WRITE, 'w'),
    (ModeBits::OTHER_EXEC, 'x'),
];

impl ModeBits {
    pub fn from_mode(mode: u32) -> Self {
        Self::from_bits_truncate(mode)
    }

    /// The nine `rwx` characters, `-` for each unset bit.
    pub fn symbolic(self) -> String {
        SYMBOLS
            .iter()
            .map(|(bit, ch)| if self.contains(*bit) { *ch } else { '-' })
            .collect()
    }
}

/// Ten-character permission column: `d` or `-`, then the `rwx` triads.
pub fn permission_string(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    out.push_str(&ModeBits::from_mode(mode).symbolic());
    out
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
