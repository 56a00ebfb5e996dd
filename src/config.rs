use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::engine_types::PrimeResult;

/// 素数一覧の出力形式。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `"2 3 5 "` のように各素数の後ろに空白を 1 つ付ける（最後の素数にも付く）
    #[default]
    Spaced,
    /// 1 行 1 素数
    Text,
    CSV,
    JSON,
}

/// 対話 CLI の文言と一覧の出力形式。
///
/// `Default` は CLI の標準出力フォーマットそのものです。
/// `count_line` の `{count}` と `listing_header` の `{bound}` は実行時に置換されます。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub intro: String,
    pub prompt: String,
    pub retry_message: String,
    pub count_line: String,
    pub listing_header: String,
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intro: "This program uses the Sieve of Eratosthenes to determine which numbers are prime."
                .to_string(),
            prompt: "Please enter upper bound:".to_string(),
            retry_message: "Please enter a number greater than zero.".to_string(),
            count_line: "There are {count} primes:".to_string(),
            listing_header: "The prime numbers between 0 and {bound} are:".to_string(),
            output_format: OutputFormat::Spaced,
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> PrimeResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> PrimeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn format_count_line(&self, count: u64) -> String {
        self.count_line.replace("{count}", &count.to_string())
    }

    pub fn format_listing_header(&self, bound: u64) -> String {
        self.listing_header.replace("{bound}", &bound.to_string())
    }
}

/// TOML ファイルから設定を読み込む。書かれていない項目は既定値になる。
pub fn load_config<P: AsRef<Path>>(path: P) -> PrimeResult<Config> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| format!("Failed to open config {path:?}: {e}"))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Config::from_toml_str(&contents)
}
