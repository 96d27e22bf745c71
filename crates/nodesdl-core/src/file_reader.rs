use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Reads a schema file into a `String`, distinguishing a missing path, an
/// I/O failure and non-UTF-8 content.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::FileReadError {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadContentError::FileDecodeError {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Schema file `{}` is not valid UTF-8: {err}", file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read schema file `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        use ReadContentError::*;
        match (self, other) {
            (
                FileDecodeError { file_path: path1, err: err1 },
                FileDecodeError { file_path: path2, err: err2 },
            ) => path1 == path2 && err1 == err2,

            // io::Error has no PartialEq; comparing kinds is close enough.
            (
                FileReadError { file_path: path1, err: err1 },
                FileReadError { file_path: path2, err: err2 },
            ) => path1 == path2 && err1.kind() == err2.kind(),

            (PathIsNotAFile(path1), PathIsNotAFile(path2)) => path1 == path2,

            _ => false,
        }
    }
}
