use crate::domain::{DimensionError, DirectoryError, SourceImageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required flags. Use -file and -sizes.")]
    Usage,

    #[error(transparent)]
    Source(#[from] SourceImageError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("{failed} of {total} resized images could not be saved")]
    PartialFailure { failed: usize, total: usize },

    #[error("none of the {total} resized images could be saved")]
    AllFailed { total: usize },
}

impl AppError {
    /// プロセスの終了コード。
    ///
    /// * `1`: 入力検証・準備段階のエラー、またはすべての出力に失敗
    /// * `2`: 必須フラグの不足
    /// * `3`: 一部の出力だけが失敗
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage => 2,
            AppError::PartialFailure { .. } => 3,
            AppError::Source(_)
            | AppError::Dimension(_)
            | AppError::Directory(_)
            | AppError::AllFailed { .. } => 1,
        }
    }
}
