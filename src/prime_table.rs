use std::time::Instant;

use bitvec::prelude::*;

use crate::engine_types::TableError;
use crate::sieve_math::sieve_flags;

/// `[0, bound]` の各整数が素数かどうかを保持する、構築後は不変の素数表。
///
/// 構築時にエラトステネスの篩を一度だけ実行し、以後の問い合わせ
/// （`is_prime` / `count_primes` / `primes`）はすべてこのフラグ列を読むだけです。
/// フラグ列はこのインスタンスが専有するため、複数の表を別スレッドで
/// 並行に構築・参照しても調停は要りません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    bound: u64,
    /// インデックス = 整数値。長さは常に `bound + 1`。
    is_prime: BitVec,
    /// 表は不変なので、素数の個数は構築時に数えておく。
    count: u64,
}

impl PrimeTable {
    /// 上限 `bound`（両端含む）までの素数表を構築する。
    ///
    /// - `bound < 0` の場合は `TableError::InvalidBound`。
    /// - `bound == 0` は有効で、長さ 1・素数 0 個の表になる。
    /// - フラグ列を確保できない場合は `TableError::TooLarge`。
    ///
    /// 構築は成功すれば完了済みの表を返し、失敗すれば何も返さない（中間状態は存在しない）。
    pub fn new(bound: i64) -> Result<Self, TableError> {
        if bound < 0 {
            return Err(TableError::InvalidBound { bound });
        }
        let size = usize::try_from(bound).map_err(|_| TableError::TooLarge { bound })?;

        let start_time = Instant::now();
        let is_prime = sieve_flags(size).ok_or(TableError::TooLarge { bound })?;
        let count = is_prime.count_ones() as u64;

        log::debug!(
            "sieved [0, {}] in {:.3} ms: {} primes",
            bound,
            start_time.elapsed().as_secs_f64() * 1000.0,
            count
        );

        Ok(Self {
            bound: bound as u64,
            is_prime,
            count,
        })
    }

    /// 構築時に与えた上限値。
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// フラグ列の長さ（`bound + 1`）。
    pub fn len(&self) -> usize {
        self.is_prime.len()
    }

    /// フラグ列が空かどうか。
    ///
    /// 長さは `bound + 1` なので、構築済みの表では常に false になる。
    pub fn is_empty(&self) -> bool {
        self.is_prime.is_empty()
    }

    /// `num` が素数かどうか。
    ///
    /// `num` が `[0, bound]` の外なら `TableError::OutOfRange` を返し、
    /// エラーメッセージには許容範囲が含まれます。
    pub fn is_prime(&self, num: i64) -> Result<bool, TableError> {
        let out_of_range = TableError::OutOfRange {
            num,
            bound: self.bound,
        };
        let idx = usize::try_from(num).map_err(|_| out_of_range)?;
        self.is_prime.get(idx).map(|flag| *flag).ok_or(out_of_range)
    }

    /// `[0, bound]` に含まれる素数の個数。
    pub fn count_primes(&self) -> u64 {
        self.count
    }

    /// `[0, bound]` の素数を昇順に列挙するイテレータ。
    ///
    /// 呼ぶたびに先頭からやり直せます。
    pub fn primes(&self) -> Primes<'_> {
        Primes {
            ones: self.is_prime.iter_ones(),
        }
    }

    /// 表に含まれる最大の素数。`bound < 2` なら None。
    pub fn largest_prime(&self) -> Option<u64> {
        self.is_prime.last_one().map(|idx| idx as u64)
    }
}

/// `PrimeTable::primes` が返すイテレータ。
pub struct Primes<'a> {
    ones: bitvec::slice::IterOnes<'a, usize, Lsb0>,
}

impl Iterator for Primes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.ones.next().map(|idx| idx as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}

impl DoubleEndedIterator for Primes<'_> {
    fn next_back(&mut self) -> Option<u64> {
        self.ones.next_back().map(|idx| idx as u64)
    }
}

impl<'a> IntoIterator for &'a PrimeTable {
    type Item = u64;
    type IntoIter = Primes<'a>;

    fn into_iter(self) -> Primes<'a> {
        self.primes()
    }
}
