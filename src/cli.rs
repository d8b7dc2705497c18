use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// `-output` を省略したときの出力先
pub const DEFAULT_OUTPUT_DIR: &str = "images";

pub const USAGE: &str =
    "Usage: image_resizer -file <image_path> -sizes <size1 size2 ...> -output <output_dir>";

/// 1 つの画像から、指定した幅ごとのリサイズ済み PNG を作成するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 元画像ファイルのパス (PNG または JPEG)
    #[arg(long, allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// 空白区切りの幅のリスト (例: "120 200 220")
    #[arg(long, allow_hyphen_values = true)]
    pub sizes: Option<String>,

    /// リサイズ後の画像を保存するフォルダ
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, allow_hyphen_values = true)]
    pub output: PathBuf,
}

// 単一ハイフンでも受け付ける長いフラグ名と、値を取るかどうか
const SINGLE_DASH_FLAGS: [(&str, bool); 4] = [
    ("file", true),
    ("sizes", true),
    ("output", true),
    ("help", false),
];

fn takes_value(name: &str) -> Option<bool> {
    SINGLE_DASH_FLAGS
        .iter()
        .find(|(flag, _)| *flag == name)
        .map(|&(_, takes_value)| takes_value)
}

/// `-file x` / `-file=x` 形式のフラグを clap が解釈できる `--file` 形式に書き換えます。
///
/// フラグの値の位置にあるトークン (例: `-sizes -5` の `-5`) は書き換えません。
/// 先頭要素 (プログラム名) と `--` 以降もそのまま渡します。
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().map(Into::into).enumerate() {
        if idx == 0 || passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let (dashes, rest) = if let Some(rest) = text.strip_prefix("--") {
            ("--", rest)
        } else if let Some(rest) = text.strip_prefix('-') {
            ("-", rest)
        } else {
            normalized.push(arg);
            continue;
        };
        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };

        match takes_value(name) {
            Some(value_follows) => {
                expecting_value = value_follows && !inline_value;
                if dashes == "-" {
                    normalized.push(OsString::from(format!("-{text}")));
                } else {
                    normalized.push(arg);
                }
            }
            None => normalized.push(arg),
        }
    }

    normalized
}

/// コマンドライン引数をパースする
pub fn parse_args() -> Args {
    Args::parse_from(normalize_flags(std::env::args_os()))
}
