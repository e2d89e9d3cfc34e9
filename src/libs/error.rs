use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The mean of zero scores is undefined
    #[error("no SCC scores found in input")]
    EmptyInput,

    /// An external program could not be started
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external program ran but exited unsuccessfully
    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },

    /// The captured stdout of an external program is not UTF-8
    #[error("`{program}` wrote invalid UTF-8: {source}")]
    Utf8 {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
