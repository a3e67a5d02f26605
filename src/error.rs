/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Failures of the batch driver: reading files, parsing them, printing the
/// report. The scheduler itself never fails.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown policy '{0}', expected 'greedy' or 'sweep'")]
    InvalidPolicy(String),

    #[error("invalid start floor '{0}'")]
    InvalidFloor(String),

    #[error("no scenario given, pass --scenario <path> or --reference")]
    MissingScenario,
}

pub type Result<T> = std::result::Result<T, DispatchError>;
