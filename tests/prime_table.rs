use sosu_table::sieve_math::integer_sqrt;
use sosu_table::{PrimeTable, TableError};

/// 試し割りによる素数判定（テスト専用）。
fn is_prime_trial(k: u64) -> bool {
    if k < 2 {
        return false;
    }
    (2..=integer_sqrt(k)).all(|d| k % d != 0)
}

#[test]
fn is_prime_matches_trial_division_for_small_bounds() {
    for n in 0..=200i64 {
        let table = PrimeTable::new(n).expect("non-negative bound");
        assert_eq!(table.len(), n as usize + 1);
        for k in 0..=n {
            assert_eq!(
                table.is_prime(k).unwrap(),
                is_prime_trial(k as u64),
                "is_prime({k}) with bound {n}"
            );
        }
    }
}

#[test]
fn count_agrees_with_per_index_queries() {
    for n in [0i64, 1, 2, 3, 4, 29, 30, 31, 97, 100, 1_000, 4_096] {
        let table = PrimeTable::new(n).unwrap();
        let by_query = (0..=n).filter(|&k| table.is_prime(k).unwrap()).count() as u64;
        assert_eq!(table.count_primes(), by_query, "bound {n}");
    }
}

#[test]
fn primes_sequence_is_ascending_and_complete() {
    let table = PrimeTable::new(1_000).unwrap();
    let primes: Vec<u64> = table.primes().collect();

    assert!(primes.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(primes.len() as u64, table.count_primes());
    for &p in &primes {
        assert!(table.is_prime(p as i64).unwrap(), "{p} listed but not prime");
    }
    for k in 0..=1_000i64 {
        if table.is_prime(k).unwrap() {
            assert!(primes.binary_search(&(k as u64)).is_ok(), "{k} missing");
        }
    }

    // 何度でも先頭から列挙し直せる
    let again: Vec<u64> = (&table).into_iter().collect();
    assert_eq!(primes, again);
}

#[test]
fn out_of_range_queries_fail_with_bounds_in_message() {
    let table = PrimeTable::new(10).unwrap();
    for num in [-1i64, -100, i64::MIN, 11, 12, i64::MAX] {
        let err = table.is_prime(num).unwrap_err();
        assert_eq!(err, TableError::OutOfRange { num, bound: 10 });
    }
    let msg = table.is_prime(11).unwrap_err().to_string();
    assert!(msg.contains("between 0 and 10"), "unexpected message: {msg}");
}

#[test]
fn negative_bound_is_rejected() {
    assert_eq!(
        PrimeTable::new(-1).unwrap_err(),
        TableError::InvalidBound { bound: -1 }
    );
    assert!(matches!(
        PrimeTable::new(i64::MIN),
        Err(TableError::InvalidBound { .. })
    ));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn unallocatable_bound_is_too_large() {
    assert_eq!(
        PrimeTable::new(i64::MAX).unwrap_err(),
        TableError::TooLarge { bound: i64::MAX }
    );
    let msg = PrimeTable::new(9_000_000_000_000_000_000).unwrap_err().to_string();
    assert!(msg.contains("too large"), "unexpected message: {msg}");
}

#[test]
fn bound_one_has_no_primes() {
    let table = PrimeTable::new(1).unwrap();
    assert_eq!(table.count_primes(), 0);
    assert!(!table.is_prime(0).unwrap());
    assert!(!table.is_prime(1).unwrap());
    assert_eq!(table.largest_prime(), None);
}

#[test]
fn bound_ten_and_twenty() {
    let ten = PrimeTable::new(10).unwrap();
    assert_eq!(ten.primes().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
    assert_eq!(ten.count_primes(), 4);

    let twenty = PrimeTable::new(20).unwrap();
    assert_eq!(
        twenty.primes().collect::<Vec<_>>(),
        vec![2, 3, 5, 7, 11, 13, 17, 19]
    );
    assert_eq!(twenty.count_primes(), 8);
    assert_eq!(twenty.largest_prime(), Some(19));
}

#[test]
fn bound_two() {
    let table = PrimeTable::new(2).unwrap();
    assert_eq!(table.primes().collect::<Vec<_>>(), vec![2]);
    assert!(table.is_prime(2).unwrap());
    assert_eq!(
        table.is_prime(3),
        Err(TableError::OutOfRange { num: 3, bound: 2 })
    );
}

#[test]
fn bound_zero_is_a_single_non_prime_slot() {
    let table = PrimeTable::new(0).unwrap();
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
    assert_eq!(table.count_primes(), 0);
    assert_eq!(table.primes().next(), None);
    assert!(!table.is_prime(0).unwrap());
    assert!(table.is_prime(1).is_err());
}

#[test]
fn primes_iterate_backwards_from_largest() {
    let table = PrimeTable::new(100).unwrap();
    assert_eq!(table.primes().next_back(), Some(97));
    assert_eq!(table.primes().rev().take(3).collect::<Vec<_>>(), vec![97, 89, 83]);
}

#[test]
fn tables_built_on_separate_threads_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| PrimeTable::new(50_000).unwrap()))
        .collect();
    let tables: Vec<PrimeTable> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(tables.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(tables[0].count_primes(), 5_133);
}

#[test]
fn integer_sqrt_is_exact_floor() {
    let cases: &[(u64, u64)] = &[
        (0, 0),
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 2),
        (15, 3),
        (16, 4),
        (99, 9),
        (100, 10),
        (u32::MAX as u64 * u32::MAX as u64, u32::MAX as u64),
        (u64::MAX, u32::MAX as u64),
    ];
    for &(n, expected) in cases {
        assert_eq!(integer_sqrt(n), expected, "integer_sqrt({n})");
    }
}
