//! Find lircd.conf files below a directory

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// List every file with a `.conf` extension below root, in file name order.
/// Entries below root which cannot be read are skipped with a warning, but if
/// root itself cannot be read that is an error.
pub fn conf_files(root: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new("conf")) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn testdata() {
        let files = conf_files(Path::new("testdata/conf")).unwrap();

        assert_eq!(
            files,
            [
                "testdata/conf/broken/bad_code.conf",
                "testdata/conf/broken/truncated.conf",
                "testdata/conf/generic/eight_bit.conf",
                "testdata/conf/generic/test_remote.conf",
                "testdata/conf/latin1/tele.conf",
                "testdata/conf/nec/yamaha_rav16.lircd.conf",
            ]
            .map(PathBuf::from)
        );

        let files = conf_files(Path::new("testdata/conf/generic/eight_bit.conf")).unwrap();
        assert_eq!(files, [PathBuf::from("testdata/conf/generic/eight_bit.conf")]);

        assert!(conf_files(Path::new("testdata/nothing-here")).is_err());
    }
}
