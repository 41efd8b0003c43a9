pub const COMMENT_PREFIX: char = ';';
pub const ROW_SEPARATORS: [char; 2] = ['\n', '|'];
pub const DEFAULT_SEPARATOR: &str = "\n";
pub const PADDING_GLYPH: char = ' ';
