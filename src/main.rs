use image_resizer::cli::{self, USAGE};
use image_resizer::error::AppError;
use image_resizer::workflow;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 既定では warn 以上のみ。詳細は RUST_LOG=debug で確認できる
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // コマンドライン引数を解析します
    let args = cli::parse_args();

    match workflow::run(args).and_then(workflow::BatchReport::into_result) {
        Ok(report) => {
            log::info!("saved {} resized images", report.saved().len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            // 診断メッセージはすべて標準出力に出す
            println!("Error: {}", e);
            if let AppError::Usage = e {
                println!("{}", USAGE);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
