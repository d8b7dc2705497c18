//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 「検証 → 出力先の準備 → 幅ごとのリサイズと保存」という処理フローを実装します。

use crate::cli::Args;
use crate::domain::{OutputDirectory, OutputError, ResizedImage, SourceImage, TargetWidth};
use crate::error::AppError;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Instant;

/// 1回のバッチ処理の結果。
///
/// 保存に成功したパスと、幅ごとの失敗を要求された順に保持します。
#[derive(Debug, Default)]
pub struct BatchReport {
    saved: Vec<PathBuf>,
    failures: Vec<OutputError>,
}

impl BatchReport {
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    pub fn failures(&self) -> &[OutputError] {
        &self.failures
    }

    /// 要求された幅の総数。
    pub fn total(&self) -> usize {
        self.saved.len() + self.failures.len()
    }

    /// 失敗が含まれていれば、その程度に応じたエラーに変換します。
    pub fn into_result(self) -> Result<Self, AppError> {
        let failed = self.failures.len();
        let total = self.total();
        if failed == 0 {
            Ok(self)
        } else if failed == total {
            Err(AppError::AllFailed { total })
        } else {
            Err(AppError::PartialFailure { failed, total })
        }
    }
}

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(BatchReport)`: 出力ループまで到達した場合。個々の幅の失敗はレポートに含まれる。
/// * `Err(AppError)`: 引数不足・入力検証・出力先の準備のいずれかで失敗した場合。
///   この場合、ファイルは1つも出力されていない。
pub fn run(args: Args) -> Result<BatchReport, AppError> {
    // 1. 必須フラグの確認 (空文字列も未指定扱い。空白だけのサイズ指定は空のリストとして続行)
    let file = args
        .file
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(AppError::Usage)?;
    let sizes = args
        .sizes
        .as_deref()
        .filter(|sizes| !sizes.is_empty())
        .ok_or(AppError::Usage)?;

    // 2. 元画像の検証とデコード (デコードはここで一度だけ行う)
    let source = SourceImage::open(file)?;

    // 3. 幅の検証。出力先に触れる前に全トークンを確認する
    let widths = TargetWidth::parse_list(sizes)?;

    // 4. 出力ディレクトリの準備
    let output_dir = OutputDirectory::prepare(&args.output)?;

    // 5. 幅ごとにリサイズして保存
    Ok(resize_all(&source, &widths, &output_dir))
}

/// 指定された幅の順にリサイズと保存を行います。
///
/// ある幅の保存に失敗しても、エラーを表示して次の幅の処理を続けます。
pub fn resize_all(
    source: &SourceImage,
    widths: &[TargetWidth],
    output_dir: &OutputDirectory,
) -> BatchReport {
    let mut report = BatchReport::default();

    for &width in widths {
        let started = Instant::now();
        let resized = ResizedImage::from_source(source, width);
        debug!(
            "resized to {:?} in {:?}",
            resized.dimensions(),
            started.elapsed()
        );

        match resized.save_png(output_dir) {
            Ok(path) => {
                println!("Image saved as {}", path.display());
                report.saved.push(path);
            }
            Err(e) => {
                println!("Error: {}", e);
                warn!("skipping width {}: {:?}", width, e);
                report.failures.push(e);
            }
        }
    }

    report
}
