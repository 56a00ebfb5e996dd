use bitvec::prelude::*;

/// `n` 以下の最大の整数平方根（floor(sqrt(n))）を 2 分探索で求める。
///
/// 浮動小数点を使わないため、`u64` 全域で誤差なく求まります。
pub fn integer_sqrt(n: u64) -> u64 {
    // floor(sqrt(u64::MAX)) は u32::MAX なので、探索範囲をそこで頭打ちにする
    let mut low = 0u64;
    let mut high = n.min(u32::MAX as u64);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if mid * mid <= n {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

/// エラトステネスの篩で `[0, bound]` の素数フラグを作る。
///
/// - 戻り値の長さは必ず `bound + 1` で、インデックス `i` のビットが立っていれば `i` は素数。
/// - 0 と 1 は常に false。
/// - `2..=floor(sqrt(bound))` の各 `i` が素数のまま残っていれば、
///   `i*2, i*3, ...`（`bound` 以下）をすべて合成数として落とす。
///
/// フラグ列を確保できない場合（`bound + 1` がオーバーフローする、メモリ予約に失敗する）は `None`。
pub fn sieve_flags(bound: usize) -> Option<BitVec> {
    let len = bound.checked_add(1)?;
    let mut is_prime = allocate_flags(len)?;

    is_prime.set(0, false);
    if len > 1 {
        is_prime.set(1, false);
    }

    let root = integer_sqrt(bound as u64) as usize;
    for i in 2..=root {
        if is_prime[i] {
            for multiple in (i * 2..=bound).step_by(i) {
                is_prime.set(multiple, false);
            }
        }
    }

    Some(is_prime)
}

/// 全ビットを立てた長さ `len` のビット列を、失敗可能な予約で確保する。
fn allocate_flags(len: usize) -> Option<BitVec> {
    let words = len.div_ceil(usize::BITS as usize);
    let mut storage: Vec<usize> = Vec::new();
    storage.try_reserve_exact(words).ok()?;
    storage.resize(words, usize::MAX);

    let mut flags = BitVec::from_vec(storage);
    flags.truncate(len);
    Some(flags)
}
