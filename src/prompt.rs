use std::io::{BufRead, Write};

use crate::config::Config;
use crate::engine_types::{PrimeResult, TableError};
use crate::output::{write_listing, ListingWriter};
use crate::prime_table::PrimeTable;

/// 説明文とプロンプトを表示し、素数表を構築できる上限値が入力されるまで 1 行ずつ読み直す。
///
/// - 整数として解釈できない行や 1 未満の値には `cfg.retry_message` を表示して読み直す。
/// - 整数としては正しくても、フラグ列を確保できないほど大きい値（`TableError::TooLarge`）も同様に読み直す。
/// - 行末の改行（`\n` / `\r\n`）以外は取り除かないので、前後に空白がある行は不正な入力として扱う。
/// - 有効な値を読む前に入力が閉じた場合はエラー。
pub fn read_table<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> PrimeResult<PrimeTable> {
    writeln!(out, "{}", cfg.intro)?;
    writeln!(out, "{}", cfg.prompt)?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err("standard input closed before a valid upper bound was entered".into());
        }
        let entered = line.trim_end_matches(['\n', '\r']);

        match entered.parse::<i64>() {
            Ok(bound) if bound >= 1 => match PrimeTable::new(bound) {
                Ok(table) => {
                    log::info!("upper bound accepted: {bound}");
                    return Ok(table);
                }
                Err(e @ TableError::TooLarge { .. }) => log::warn!("rejected upper bound: {e}"),
                Err(e) => return Err(e.into()),
            },
            Ok(bound) => log::warn!("rejected non-positive upper bound: {bound}"),
            Err(e) => log::warn!("rejected upper bound input {entered:?}: {e}"),
        }

        writeln!(out, "{}", cfg.retry_message)?;
        out.flush()?;
    }
}

/// 上限値を読み取り、素数表を作って個数と一覧を `out` に書き出す。
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, cfg: &Config) -> PrimeResult<()> {
    let table = read_table(input, out, cfg)?;

    writeln!(out, "{}", cfg.format_count_line(table.count_primes()))?;
    writeln!(out, "{}", cfg.format_listing_header(table.bound()))?;

    let mut writer = ListingWriter::new(&mut *out, cfg.output_format);
    let written = write_listing(&table, &mut writer)?;

    log::info!(
        "listed {} primes up to {} (largest: {:?})",
        written,
        table.bound(),
        table.largest_prime()
    );
    Ok(())
}
