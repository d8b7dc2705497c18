// リサイズ後の画像と、その PNG 保存処理

use super::output_directory::OutputDirectory;
use super::source_image::SourceImage;
use super::target_width::TargetWidth;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// リサイズに使うフィルタ。半径 3 の Lanczos (窓関数付き sinc)。
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// 1つの幅に対してリサイズされた画像。
///
/// 高さは元画像の縦横比を保つように自動で決まります。
pub struct ResizedImage {
    width: TargetWidth,
    image: DynamicImage,
}

/// 出力ファイルの保存時に発生するエラー。
///
/// どちらもその幅だけの失敗で、バッチ全体は止まりません。
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("error creating the output file '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error encoding the resized image '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl OutputError {
    pub fn path(&self) -> &Path {
        match self {
            OutputError::Create { path, .. } | OutputError::Encode { path, .. } => path,
        }
    }
}

/// 元画像の縦横比を保つ高さを求めます。結果は四捨五入し、最低でも 1 になります。
///
/// `round(元の高さ × 幅 / 元の幅)` で計算するため、`floor(0.7 + ...)` で丸める
/// 実装 (Go の nfnt/resize など) とは端数によって 1px ずれることがあります。
pub fn derived_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    let height = f64::from(source_height) * f64::from(target_width) / f64::from(source_width);
    height.round().max(1.0) as u32
}

impl ResizedImage {
    /// 元画像を指定幅にリサイズします。
    pub fn from_source(source: &SourceImage, width: TargetWidth) -> Self {
        let (src_w, src_h) = source.dimensions();
        let height = derived_height(src_w, src_h, width.get());
        let image = source.image().resize_exact(width.get(), height, RESAMPLE_FILTER);
        Self { width, image }
    }

    /// 出力ファイル名 (`<幅>.png`)。元のフォーマットに関わらず拡張子は常に `.png`。
    pub fn file_name(&self) -> String {
        format!("{}.png", self.width)
    }

    pub fn width(&self) -> TargetWidth {
        self.width
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 出力先ディレクトリに PNG として保存し、保存先のパスを返します。
    ///
    /// 既に同名のファイルがある場合は上書きします。
    /// ファイルハンドルはこの関数のスコープを抜けた時点で、成功・失敗に関わらず閉じられます。
    pub fn save_png(&self, output_dir: &OutputDirectory) -> Result<PathBuf, OutputError> {
        let path = output_dir.as_path().join(self.file_name());

        let file = match File::create(&path) {
            Ok(file) => file,
            Err(source) => return Err(OutputError::Create { path, source }),
        };
        let mut writer = BufWriter::new(file);

        let encoded = self
            .image
            .write_with_encoder(PngEncoder::new(&mut writer))
            .and_then(|()| writer.flush().map_err(ImageError::IoError));
        match encoded {
            Ok(()) => Ok(path),
            Err(source) => Err(OutputError::Encode { path, source }),
        }
    }
}
