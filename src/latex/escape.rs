//! LaTeX text escaping and verbatim delimiter selection.

/// Escape LaTeX-significant characters in text.
///
/// Single left-to-right pass over a fixed substitution set. Newlines become
/// blank lines, so every line break in the source text forces a paragraph
/// break in the output. Already-encoded text is not safe to pass through
/// again.
pub fn tex_encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '\\' => result.push_str("$\\backslash$"),
            '&' => result.push_str("\\&"),
            '$' => result.push_str("\\$ "),
            '^' => result.push_str("\\^{}"),
            '%' => result.push_str("\\%"),
            '#' => result.push_str("\\# "),
            '_' => result.push_str("\\_"),
            '<' => result.push_str("\\textless{}"),
            '>' => result.push_str("\\textgreater{}"),
            '\n' => result.push_str("\n\n"),
            _ => result.push(c),
        }
    }

    result
}

/// [`tex_encode`] over optional text, mapping `None` to the empty string.
pub fn tex_encode_opt(text: Option<&str>) -> String {
    text.map(tex_encode).unwrap_or_default()
}

/// Candidate delimiters for `\lstinline`, in preference order.
pub const VERBATIM_DELIMITERS: [char; 9] = ['+', '*', '|', '$', '&', '%', '!', '-', '_'];

/// Pick the first delimiter that does not occur in the verbatim text.
///
/// Returns `None` when the text contains all nine candidates; there is no
/// safe way to delimit such text and the caller must refuse to emit it.
pub fn verbatim_delimiter(text: &str) -> Option<char> {
    VERBATIM_DELIMITERS
        .iter()
        .copied()
        .find(|&delim| !text.contains(delim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(tex_encode("plain words"), "plain words");
        assert_eq!(tex_encode(""), "");
    }

    #[test]
    fn test_substitutions() {
        assert_eq!(tex_encode("\\"), "$\\backslash$");
        assert_eq!(tex_encode("&"), "\\&");
        assert_eq!(tex_encode("$"), "\\$ ");
        assert_eq!(tex_encode("^"), "\\^{}");
        assert_eq!(tex_encode("%"), "\\%");
        assert_eq!(tex_encode("#"), "\\# ");
        assert_eq!(tex_encode("_"), "\\_");
        assert_eq!(tex_encode("<"), "\\textless{}");
        assert_eq!(tex_encode(">"), "\\textgreater{}");
        assert_eq!(tex_encode("\n"), "\n\n");
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(tex_encode("a & b"), "a \\& b");
        assert_eq!(tex_encode("100%_done"), "100\\%\\_done");
        assert_eq!(tex_encode("line one\nline two"), "line one\n\nline two");
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(tex_encode_opt(None), "");
        assert_eq!(tex_encode_opt(Some("x_y")), "x\\_y");
    }

    #[test]
    fn test_delimiter_prefers_plus() {
        assert_eq!(verbatim_delimiter("a.b"), Some('+'));
        assert_eq!(verbatim_delimiter("a+b"), Some('*'));
        assert_eq!(verbatim_delimiter("a+*b"), Some('|'));
    }

    #[test]
    fn test_delimiter_exhaustion() {
        assert_eq!(verbatim_delimiter("+*|$&%!-_"), None);
        assert_eq!(verbatim_delimiter("x + y * z | $a & b% c! d-e_f"), None);
    }

    proptest! {
        #[test]
        fn prop_safe_text_is_fixed_point(text in "[a-zA-Z0-9 .,:;()!?'@~+*|=-]*") {
            prop_assert_eq!(tex_encode(&text), text);
        }

        #[test]
        fn prop_newlines_double(text in "[a-z\n]{0,40}") {
            let breaks = text.matches('\n').count();
            let encoded = tex_encode(&text);
            prop_assert_eq!(encoded.matches('\n').count(), breaks * 2);
        }

        #[test]
        fn prop_specials_are_escaped(text in "[a-z&$^%#_<>]{0,40}") {
            // Backslash-free input, so every remaining special in the
            // output must be part of an escape sequence.
            let encoded = tex_encode(&text);
            let bytes = encoded.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if matches!(b, b'&' | b'$' | b'%' | b'#' | b'_' | b'^') {
                    prop_assert_eq!(bytes[i - 1], b'\\');
                }
                prop_assert_ne!(*b, b'<');
                prop_assert_ne!(*b, b'>');
            }
        }

        #[test]
        fn prop_chosen_delimiter_not_in_text(text in ".*") {
            if let Some(delim) = verbatim_delimiter(&text) {
                prop_assert!(!text.contains(delim));
                prop_assert!(VERBATIM_DELIMITERS.contains(&delim));
            } else {
                for delim in VERBATIM_DELIMITERS {
                    prop_assert!(text.contains(delim));
                }
            }
        }
    }
}
