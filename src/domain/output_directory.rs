use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 出力先ディレクトリ。
///
/// `prepare` を通してのみ作成でき、インスタンスが存在する時点でパスが存在することが保証されます。
/// 既存のパスがディレクトリかどうかは確認しません。ファイルだった場合は各出力の作成時に失敗します。
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
}

/// 出力先ディレクトリの準備で発生するエラー。
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("error creating the output directory '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputDirectory {
    /// 出力先ディレクトリを用意します。
    ///
    /// 存在しない場合は親ディレクトリも含めて作成します (Unix ではモード `0755`)。
    /// 既に存在する場合は、ディレクトリ以外のものであっても何もしません。
    pub fn prepare<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => warn!("output path {} exists but is not a directory", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                create_dir(path).map_err(|source| DirectoryError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("created output directory {}", path.display());
            }
            Err(source) => {
                return Err(DirectoryError::Create {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn create_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(path)
}

impl fmt::Display for OutputDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
