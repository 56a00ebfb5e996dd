use std::error::Error;
use std::fmt;

// 素数表（`PrimeTable`）と入出力まわりで共有するエラー型の定義。
//
// - `TableError` は表の構築・問い合わせで呼び出し側に返す型付きエラーです。
// - 入出力を伴う処理（プロンプト、設定ファイル、一覧出力）は `PrimeResult` を返します。

/// 入出力を伴う処理の共通結果型。
///
/// - `TableError` も `io::Error` も `toml` のエラーも `?` でそのまま伝播できます。
pub type PrimeResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 素数表の構築・問い合わせで発生するエラー。
///
/// どのエラーも入力（上限値・問い合わせ値）を直せば回復できるもので、
/// 表の内部状態が壊れることはありません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// 負の上限値で構築しようとした。
    InvalidBound { bound: i64 },
    /// 上限値が大きすぎて、フラグ列をこのプラットフォームで確保できない。
    TooLarge { bound: i64 },
    /// `is_prime` の引数が `[0, bound]` の外にある。
    OutOfRange { num: i64, bound: u64 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidBound { bound } => {
                write!(f, "upper bound must be non-negative (got {bound})")
            }
            TableError::TooLarge { bound } => {
                write!(f, "upper bound {bound} is too large to allocate a prime table")
            }
            TableError::OutOfRange { num, bound } => {
                write!(f, "num must be between 0 and {bound} (got {num})")
            }
        }
    }
}

impl Error for TableError {}
