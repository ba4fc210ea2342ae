/// What the driver should do with a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Blank line or `#` comment.
    Skip,
    /// Line content with trailing whitespace and terminator removed.
    Content(&'a str),
}

pub fn classify(raw: &str) -> LineClass<'_> {
    let line = raw.trim_end();
    if line.is_empty() || line.starts_with('#') {
        LineClass::Skip
    } else {
        LineClass::Content(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(classify("\n"), LineClass::Skip);
        assert_eq!(classify("\r\n"), LineClass::Skip);
        assert_eq!(classify("   \t\n"), LineClass::Skip);
        assert_eq!(classify("# Topology file: generated on ..."), LineClass::Skip);
    }

    #[test]
    fn trims_trailing_whitespace_only() {
        assert_eq!(classify("vendid=0x2c9 \r\n"), LineClass::Content("vendid=0x2c9"));
        assert_eq!(classify("  [1]\t\"x\"\n"), LineClass::Content("  [1]\t\"x\""));
    }
}
