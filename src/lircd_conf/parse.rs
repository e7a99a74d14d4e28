use super::{Error, Flags, RemoteConf, Token};
use std::{collections::BTreeMap, slice::Iter};

/// Walks the tokens of a single file and fills in a [`RemoteConf`].
///
/// The format is forgiving: unknown directives are skipped one token at a time,
/// so an unknown directive with arguments has its arguments treated as directives
/// too. Only running out of input while an argument is needed, or an argument
/// which should be a number but is not, is an error.
pub struct Parser<'a> {
    tokens: Iter<'a, Token<'a>>,
    line: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser {
            tokens: tokens.iter(),
            line: 0,
        }
    }

    pub fn parse(mut self) -> Result<RemoteConf, Error> {
        let mut remote = RemoteConf::default();

        while let Some(token) = self.tokens.next() {
            self.line = token.line;

            match token.text {
                "name" => {
                    remote.name = self.next_arg("name")?.to_owned();
                }
                name @ ("bits" | "eps" | "aeps" | "ptrail" | "repeat" | "pre_data_bits"
                | "pre_data" | "gap" | "toggle_bit") => {
                    let val = self.number_arg(name)?;

                    match name {
                        "bits" => remote.bits = val,
                        "eps" => remote.eps = val,
                        "aeps" => remote.aeps = val,
                        "ptrail" => remote.ptrail = val,
                        "repeat" => remote.repeat = val,
                        "pre_data_bits" => remote.pre_data_bits = val,
                        "pre_data" => remote.pre_data = val,
                        "gap" => remote.gap = val,
                        "toggle_bit" => remote.toggle_bit = val,
                        _ => unreachable!(),
                    }
                }
                name @ ("header" | "one" | "zero") => {
                    let first = self.number_arg(name)?;
                    let second = self.number_arg(name)?;

                    match name {
                        "header" => remote.header = (first, second),
                        "one" => remote.one = (first, second),
                        "zero" => remote.zero = (first, second),
                        _ => unreachable!(),
                    }
                }
                "flags" => {
                    remote.flags |= parse_flags(self.next_arg("flags")?);
                }
                "begin" => {
                    let block = self.next_arg("begin")?;

                    if block == "codes" {
                        self.read_codes(&mut remote.codes)?;
                    } else {
                        log::trace!("line {}: skipping 'begin {}'", self.line, block);
                    }
                }
                other => {
                    log::trace!("line {}: skipping '{}'", token.line, other);
                }
            }
        }

        Ok(remote)
    }

    /// Read key/code pairs until `end codes`. Running out of tokens on a key
    /// ends the block like `end codes` would.
    fn read_codes(&mut self, codes: &mut BTreeMap<String, i64>) -> Result<(), Error> {
        log::trace!("line {}: begin codes", self.line);

        while let Some(key) = self.tokens.next() {
            self.line = key.line;

            let code = self.next_arg(key.text)?;

            if key.text == "end" && code == "codes" {
                log::trace!("line {}: end codes", self.line);
                return Ok(());
            }

            let code = parse_longcode(code).ok_or_else(|| self.invalid_number(key.text, code))?;

            codes.insert(normalize_key(key.text), code);
        }

        Ok(())
    }

    fn next_arg(&mut self, directive: &str) -> Result<&'a str, Error> {
        match self.tokens.next() {
            Some(token) => {
                self.line = token.line;
                Ok(token.text)
            }
            None => Err(Error::MalformedDirective {
                directive: directive.to_owned(),
                line: self.line,
            }),
        }
    }

    fn number_arg(&mut self, directive: &str) -> Result<i64, Error> {
        let arg = self.next_arg(directive)?;

        parse_number(arg).ok_or_else(|| self.invalid_number(directive, arg))
    }

    fn invalid_number(&self, directive: &str, literal: &str) -> Error {
        Error::InvalidNumericLiteral {
            directive: directive.to_owned(),
            literal: literal.to_owned(),
            line: self.line,
        }
    }
}

/// Parse the argument of `flags`, e.g. `SPACE_ENC|CONST_LENGTH`.
pub fn parse_flags(arg: &str) -> Flags {
    let mut flags = Flags::empty();

    for flag in arg.split('|') {
        match flag {
            "SPACE_ENC" => {
                flags |= Flags::SPACE_ENC;
            }
            "CONST_LENGTH" => {
                flags |= Flags::CONST_LENGTH;
            }
            _ => {
                log::trace!("ignoring flag '{}'", flag);
            }
        }
    }

    flags
}

/// Parse a number with its base given by its prefix: `0x` for hex, `0o` or a
/// plain leading `0` for octal, `0b` for binary, and decimal otherwise. The
/// prefix may be preceded by a sign.
pub fn parse_number(s: &str) -> Option<i64> {
    let (negative, s) = if let Some(s) = s.strip_prefix('-') {
        (true, s)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };

    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = s.strip_prefix("0o").or(s.strip_prefix("0O")) {
        (oct, 8)
    } else if let Some(bin) = s.strip_prefix("0b").or(s.strip_prefix("0B")) {
        (bin, 2)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    // from_str_radix permits a sign of its own
    if digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Parse a code from a codes block. With a `0x` prefix, every leading `0` and `x`
/// is removed and the rest is hex, so `0x` or `0x0` on its own is not a valid
/// code. Anything else is decimal. Either may carry a sign after the prefix.
pub fn parse_longcode(s: &str) -> Option<i64> {
    if s.starts_with("0x") {
        i64::from_str_radix(s.trim_start_matches(['0', 'x']), 16).ok()
    } else {
        s.parse().ok()
    }
}

/// Turn a key name like `KEY_VOLUME_UP` into `Volume Up`.
///
/// Any leading `K`, `E`, `Y` or `_` characters are removed, not just a `KEY_`
/// prefix, so `KEY_EJECT` becomes `Ject`.
pub fn normalize_key(key: &str) -> String {
    let key = key.trim_start_matches(['K', 'E', 'Y', '_']);

    title_case(&key.replace(['_', '-', ' '], " "))
}

/// Upper case the first letter of every word and lower case the rest. Anything
/// which is not an ASCII letter separates words, so `f1a` becomes `F1A`, and
/// other characters are left as they are.
fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        let cased = c.is_ascii_alphabetic();

        if !cased {
            res.push(c);
        } else if in_word {
            res.push(c.to_ascii_lowercase());
        } else {
            res.push(c.to_ascii_uppercase());
        }

        in_word = cased;
    }

    res
}
