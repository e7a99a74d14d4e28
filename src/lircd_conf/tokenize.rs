/// A single word from the input, with the line it was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: u32,
}

/// Split the source into tokens separated by ASCII whitespace. A word starting
/// with `#` starts a comment which runs until the end of the line.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        let line_no = u32::try_from(line_no + 1).unwrap_or(u32::MAX);

        for word in line.split_ascii_whitespace() {
            if word.starts_with('#') {
                break;
            }

            tokens.push(Token {
                text: word,
                line: line_no,
            });
        }
    }

    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(source: &str) -> Vec<&str> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn comments() {
        assert_eq!(
            words("# header comment\n  name foo #trailing comment\n\t#\nbits 16"),
            ["name", "foo", "bits", "16"]
        );

        // only a word which starts with # is a comment
        assert_eq!(words("name a#b # c d\nnext"), ["name", "a#b", "next"]);

        assert_eq!(words("#a\n\n   \n##"), Vec::<&str>::new());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn ascii_whitespace() {
        // no-break space and em space are part of the word
        assert_eq!(
            words("name a\u{a0}b\tbits\x0c16 c\u{2003}d"),
            ["name", "a\u{a0}b", "bits", "16", "c\u{2003}d"]
        );
    }

    #[test]
    fn line_numbers() {
        let tokens = tokenize("\n\nbegin codes\r\n  KEY_1\t0x1 # one\nend codes\n");

        assert_eq!(
            tokens,
            [
                Token {
                    text: "begin",
                    line: 3
                },
                Token {
                    text: "codes",
                    line: 3
                },
                Token {
                    text: "KEY_1",
                    line: 4
                },
                Token {
                    text: "0x1",
                    line: 4
                },
                Token {
                    text: "end",
                    line: 5
                },
                Token {
                    text: "codes",
                    line: 5
                },
            ]
        );
    }
}
