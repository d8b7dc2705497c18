use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};
use log::debug;
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;
use thiserror::Error;

/// 入力として受け付ける画像フォーマット。
pub const SUPPORTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

/// デコード済みの元画像。
///
/// ファイルは `open` で一度だけデコードされ、検出されたフォーマットと一緒に保持されます。
/// 以降は読み取り専用で、リサイズのたびに再デコードすることはありません。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    format: ImageFormat,
}

/// 元画像の読み込み・検証時に発生するエラー。
#[derive(Debug, Error)]
pub enum SourceImageError {
    /// ファイルを開けなかった (存在しない、権限がないなど)。デコードより先に判定されます。
    #[error("could not open file: please check the file path")]
    FileAccess(#[source] std::io::Error),

    /// 中身が既知の画像フォーマットとしてデコードできなかった。
    #[error("could not decode image: ensure the file is a valid image format (PNG or JPEG)")]
    Decode(#[source] ImageError),

    /// デコードはできたが PNG / JPEG 以外だった。
    #[error("unsupported file format: only PNG and JPEG are allowed")]
    UnsupportedFormat(ImageFormat),
}

impl SourceImage {
    /// パスから画像を開き、デコードとフォーマット検証を行います。
    ///
    /// フォーマットは拡張子ではなくファイルの先頭バイトから判定します。
    ///
    /// # 戻り値
    /// * `Ok(SourceImage)`: PNG または JPEG としてデコードできた場合。
    /// * `Err(SourceImageError)`: 開けない・デコードできない・非対応フォーマットのいずれか。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceImageError> {
        let path = path.as_ref();
        let reader = ImageReader::open(path).map_err(SourceImageError::FileAccess)?;
        let source = Self::from_reader(reader)?;
        debug!(
            "decoded {} as {:?} ({}x{})",
            path.display(),
            source.format,
            source.width(),
            source.height()
        );
        Ok(source)
    }

    /// メモリ上のバイト列から画像をデコードします。
    pub fn from_memory(bytes: &[u8]) -> Result<Self, SourceImageError> {
        Self::from_reader(ImageReader::new(Cursor::new(bytes)))
    }

    fn from_reader<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<Self, SourceImageError> {
        // 先頭バイトの読み取りに失敗した場合 (ディレクトリを渡された等) もアクセスエラー扱い
        let mut reader = reader
            .with_guessed_format()
            .map_err(SourceImageError::FileAccess)?;
        // 大きな写真やパノラマも扱えるよう、既定のメモリ上限 (512 MiB) を外す
        reader.no_limits();
        let format = reader.format();
        let image = reader.decode().map_err(SourceImageError::Decode)?;

        match format {
            Some(format) if SUPPORTED_FORMATS.contains(&format) => Ok(Self { image, format }),
            Some(format) => Err(SourceImageError::UnsupportedFormat(format)),
            // フォーマット不明のままデコードが成功することはない
            None => Err(SourceImageError::Decode(ImageError::Unsupported(
                UnsupportedError::from_format_and_kind(
                    ImageFormatHint::Unknown,
                    UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
                ),
            ))),
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
