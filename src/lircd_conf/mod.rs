//! Parse the timing parameters and codes of a lircd.conf style remote description

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

mod parse;
mod tokenize;


pub use parse::{normalize_key, parse_flags, parse_longcode, parse_number, Parser};
pub use tokenize::{tokenize, Token};

bitflags::bitflags! {
    /// Flags from the `flags` directive. Only the encodings which matter for
    /// scanning are recognised, anything else is ignored.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u32 {
        const SPACE_ENC = 1 << 0;
        const CONST_LENGTH = 1 << 1;
    }
}

/// One remote, as read from a single file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoteConf {
    /// The file this remote was read from, if it came from a file
    pub path: Option<PathBuf>,
    pub name: String,
    pub bits: i64,
    pub flags: Flags,
    pub eps: i64,
    pub aeps: i64,
    pub header: (i64, i64),
    pub one: (i64, i64),
    pub zero: (i64, i64),
    pub ptrail: i64,
    /// lircd.conf has a pulse/space pair here, but only the first number is kept
    pub repeat: i64,
    pub pre_data_bits: i64,
    pub pre_data: i64,
    pub gap: i64,
    pub toggle_bit: i64,
    /// Normalized key name to code
    pub codes: BTreeMap<String, i64>,
}

/// Why a file has no remote. The line number is not part of the message, see [`Error::line`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing argument for '{directive}'")]
    MalformedDirective { directive: String, line: u32 },

    #[error("{directive} argument '{literal}' is not a number")]
    InvalidNumericLiteral {
        directive: String,
        literal: String,
        line: u32,
    },

    #[error("failed to read: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The line the error was found on, if it came from the contents of the file
    pub fn line(&self) -> Option<u32> {
        match self {
            Error::MalformedDirective { line, .. } | Error::InvalidNumericLiteral { line, .. } => {
                Some(*line)
            }
            Error::Io(_) => None,
        }
    }
}

impl RemoteConf {
    /// Parse the contents of a file. Any error means there is no remote.
    pub fn parse(source: &str) -> Result<RemoteConf, Error> {
        let tokens = tokenize(source);

        Parser::new(&tokens).parse()
    }

    /// Read and parse the file at the given path. A file which is not valid
    /// UTF-8 is read as Latin-1, so every byte stays distinct.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RemoteConf, Error> {
        let path = path.as_ref();

        let source = match String::from_utf8(fs::read(path)?) {
            Ok(source) => source,
            Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
        };

        log::debug!("parsing '{}'", path.display());

        let mut remote = RemoteConf::parse(&source)?;

        remote.path = Some(path.to_owned());

        Ok(remote)
    }

    /// Does this remote have a name, the given number of bits and at least one code
    pub fn matches(&self, bits: i64) -> bool {
        !self.name.is_empty() && self.bits == bits && !self.codes.is_empty()
    }
}
