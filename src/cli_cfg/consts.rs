/// Namespace entry that receives a sub-command's handler name.
pub const DEFAULT_CALLABLE_DEST: &str = "function";
/// Prefix marking arguments read from a file.
pub const DEFAULT_FROMFILE_PREFIX: char = '@';
/// Placeholder for the program name in version text.
pub const PROG_PLACEHOLDER: &str = "%(prog)s";
