/// Break `text` into chunks of at most `width` characters at whitespace.
///
/// A chunk keeps the whitespace character it was broken at, and chunks are joined
/// with `\n`. Words longer than `width` stay whole on their own line. Line
/// terminators that cannot end a chunk are dropped.
pub(crate) fn word_wrap(text: &str, width: usize) -> String {
    if text.is_empty() || width == 0 {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks: Vec<String> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if let Some(end) = fitted_chunk_end(&chars, pos, width).or_else(|| word_end(&chars, pos)) {
            chunks.push(chars[pos..end].iter().collect());
            pos = end;
        } else {
            pos += 1;
        }
    }

    chunks.join("\n")
}

fn is_terminator(c: char) -> bool {
    crate::source::is_line_terminator(c)
}

/// Longest run of 1..=width non-terminator chars followed by whitespace (included) or the end.
fn fitted_chunk_end(chars: &[char], pos: usize, width: usize) -> Option<usize> {
    let run = chars[pos..]
        .iter()
        .take(width)
        .take_while(|c| !is_terminator(**c))
        .count();

    (1..=run).rev().find_map(|n| {
        let end = pos + n;
        match chars.get(end) {
            None => Some(end),
            Some(c) if c.is_whitespace() => Some(end + 1),
            Some(_) => None,
        }
    })
}

/// A single overlong word, plus the whitespace after it.
fn word_end(chars: &[char], pos: usize) -> Option<usize> {
    if chars[pos].is_whitespace() {
        return None;
    }
    let word = chars[pos..].iter().take_while(|c| !c.is_whitespace()).count();
    let end = pos + word;
    Some(if end < chars.len() { end + 1 } else { end })
}

#[cfg(test)]
mod tests {
    use super::word_wrap;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(word_wrap("Expected rule.", 75), "Expected rule.");
    }

    #[test]
    fn breaks_after_whitespace() {
        assert_eq!(word_wrap("aaa bbb ccc", 7), "aaa bbb \nccc");
        assert_eq!(word_wrap("aaa bbb ccc", 6), "aaa \nbbb \nccc");
    }

    #[test]
    fn long_words_stay_whole() {
        assert_eq!(word_wrap("abcdefghij xy", 4), "abcdefghij \nxy");
    }

    #[test]
    fn empty_text() {
        assert_eq!(word_wrap("", 75), "");
    }
}
