/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod notice_verifier;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use notice_verifier::NoticeVerifier;
