/// Display switches, fixed once arguments are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Render permissions, owner, size and mtime for each entry.
    pub long_format: bool,
    /// Include entries whose name starts with `.`.
    pub show_hidden: bool,
}
