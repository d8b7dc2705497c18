use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// リサイズ後の幅 (ピクセル)。
///
/// `0` を表現できない `NonZeroU32` を内部に持つため、
/// このインスタンスが存在する時点で「正の整数」であることが保証されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetWidth(NonZeroU32);

/// 幅の指定が不正だった場合のエラー。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    /// `token` には最初に見つかった不正なトークンがそのまま格納されます。
    #[error("invalid dimension '{token}': dimensions must be positive integers")]
    InvalidDimension { token: String },
}

impl TargetWidth {
    pub fn new(width: u32) -> Option<Self> {
        NonZeroU32::new(width).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 空白区切りのサイズ指定 (例: `"120 200 220"`) を幅のリストに変換します。
    ///
    /// 入力の順序と重複はそのまま保持されます。
    /// 1つでも不正なトークンがあれば、その時点で全体を失敗とし、部分的な結果は返しません。
    ///
    /// # 戻り値
    /// * `Ok(Vec<TargetWidth>)`: すべてのトークンが正の整数だった場合。空文字列なら空のリスト。
    /// * `Err(DimensionError)`: 最初の不正なトークンを含むエラー。
    pub fn parse_list(sizes: &str) -> Result<Vec<Self>, DimensionError> {
        sizes.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for TargetWidth {
    type Err = DimensionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // 数値でない・範囲外・0 以下はすべて同じエラーとして扱う
        token
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| DimensionError::InvalidDimension {
                token: token.to_string(),
            })
    }
}

impl fmt::Display for TargetWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(values: &[u32]) -> Vec<TargetWidth> {
        values
            .iter()
            .map(|&v| TargetWidth::new(v).expect("テスト値は正の整数"))
            .collect()
    }

    #[test]
    fn parse_list_preserves_order_and_duplicates() {
        let res = TargetWidth::parse_list("220 120 220 200").unwrap();
        assert_eq!(res, widths(&[220, 120, 220, 200]));
    }

    #[test]
    fn parse_list_accepts_any_whitespace() {
        let res = TargetWidth::parse_list("  120\t200\n 64 ").unwrap();
        assert_eq!(res, widths(&[120, 200, 64]));
    }

    #[test]
    fn parse_list_reports_first_negative_token() {
        let res = TargetWidth::parse_list("120 -5 220 abc");
        assert_eq!(
            res,
            Err(DimensionError::InvalidDimension {
                token: "-5".to_string()
            })
        );
        assert!(res.unwrap_err().to_string().contains("'-5'"));
    }

    #[test]
    fn parse_list_rejects_zero_and_non_numeric() {
        for bad in ["0", "abc", "12px", "1.5", "99999999999"] {
            let res = TargetWidth::parse_list(&format!("100 {bad}"));
            assert_eq!(
                res,
                Err(DimensionError::InvalidDimension {
                    token: bad.to_string()
                }),
                "'{bad}' は拒否されるはずです"
            );
        }
    }

    #[test]
    fn parse_accepts_explicit_plus_sign() {
        let width: TargetWidth = "+64".parse().unwrap();
        assert_eq!(width.get(), 64);
        assert_eq!(width.to_string(), "64");
    }

    #[test]
    fn parse_list_of_blank_input_is_empty() {
        assert_eq!(TargetWidth::parse_list("   ").unwrap(), Vec::new());
    }

    #[test]
    fn new_rejects_zero() {
        assert!(TargetWidth::new(0).is_none());
        assert_eq!(TargetWidth::new(7).map(TargetWidth::get), Some(7));
    }
}
