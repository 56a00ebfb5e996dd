use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::prime_table::PrimeTable;

pub trait PrimeWriter {
    fn write_prime(&mut self, p: u64) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// 任意の `Write` に素数を `OutputFormat` に従って書き出す Writer。
pub struct ListingWriter<W: Write> {
    format: OutputFormat,
    inner: W,
    first_item_in_json: bool,
    /// これまでに書き込まれた素数の総数
    total_count: u64,
    finished: bool,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self {
            format,
            inner,
            first_item_in_json: true,
            total_count: 0,
            finished: false,
        }
    }

    /// これまでに書き込まれた素数の総数を返します。
    pub fn total_primes_written(&self) -> u64 {
        self.total_count
    }

    /// 内側の `Write` を取り出す。`finish` 済みでなければ先に閉じ処理を行う。
    pub fn into_inner(mut self) -> io::Result<W> {
        self.finish()?;
        Ok(self.inner)
    }
}

impl<W: Write> PrimeWriter for ListingWriter<W> {
    fn write_prime(&mut self, p: u64) -> io::Result<()> {
        let writer = &mut self.inner;
        match self.format {
            OutputFormat::Spaced => {
                write!(writer, "{p} ")?;
            }
            OutputFormat::Text => {
                writeln!(writer, "{p}")?;
            }
            OutputFormat::CSV => {
                writeln!(writer, "{p},")?;
            }
            OutputFormat::JSON => {
                if self.first_item_in_json {
                    write!(writer, "[{p}")?;
                    self.first_item_in_json = false;
                } else {
                    write!(writer, ",{p}")?;
                }
            }
        }

        self.total_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        if let OutputFormat::JSON = self.format {
            if self.first_item_in_json {
                write!(self.inner, "[]")?;
            } else {
                write!(self.inner, "]")?;
            }
        }
        self.finished = true;
        self.inner.flush()
    }
}

/// 表の素数を昇順にすべて `writer` へ流し、書き出した件数を返す。
pub fn write_listing(table: &PrimeTable, writer: &mut dyn PrimeWriter) -> io::Result<u64> {
    let mut written = 0u64;
    for p in table.primes() {
        writer.write_prime(p)?;
        written += 1;
    }
    writer.finish()?;
    Ok(written)
}
