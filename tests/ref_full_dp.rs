use dp_match::{
    cost::{CostFns, OverrideCost},
    Aligner, MatchMode, UnitCost,
};
use proptest::prelude::*;

/// Full-table rendition of the recurrence: row 0 follows the mode, column 0
/// is zero for every later row.
fn full_table<M, I, D>(
    s1: &[u8],
    s2: &[u8],
    anywhere: bool,
    match_cost: M,
    insert_cost: I,
    delete_cost: D,
) -> Vec<u32>
where
    M: Fn(u8, u8) -> u32,
    I: Fn(u8) -> u32,
    D: Fn(u8) -> u32,
{
    let (short, long) = if s1.len() > s2.len() { (s2, s1) } else { (s1, s2) };
    let n = short.len();
    let m = long.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    if !anywhere {
        for j in 0..=m {
            dp[0][j] = j as u32;
        }
    }
    for i in 1..=n {
        for j in 1..=m {
            let diag = dp[i - 1][j - 1] + match_cost(short[i - 1], long[j - 1]);
            let up = dp[i - 1][j] + insert_cost(short[i - 1]);
            let left = dp[i][j - 1] + delete_cost(long[j - 1]);
            dp[i][j] = diag.min(up).min(left);
        }
    }
    dp.pop().unwrap_or_default()
}

fn unit(a: u8, b: u8) -> u32 {
    u32::from(a != b)
}

proptest! {
    #[test]
    fn unit_cost_matches_full_table(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}", anywhere in any::<bool>()) {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let row = Aligner::new(UnitCost).align(s, t, anywhere);
        prop_assert_eq!(row.len(), s.len().max(t.len()) + 1);
        prop_assert_eq!(row.into_vec(), full_table(s, t, anywhere, unit, |_| 1, |_| 1));
    }

    #[test]
    fn weighted_costs_match_full_table(
        a in "[ACGT]{0,8}",
        b in "[ACGT]{0,8}",
        sub in 0u32..5,
        ins in 0u32..5,
        del in 0u32..5,
        anywhere in any::<bool>(),
    ) {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let policy = CostFns::new(
            move |x: &u8, y: &u8| if x == y { 0 } else { sub },
            move |_: &u8| ins,
            move |_: &u8| del,
        );
        let row = Aligner::new(policy).align(s, t, MatchMode::from(anywhere));
        let expected = full_table(
            s,
            t,
            anywhere,
            |x, y| if x == y { 0 } else { sub },
            |_| ins,
            |_| del,
        );
        prop_assert_eq!(row.into_vec(), expected);
    }

    #[test]
    fn override_matches_full_table(a in "[ACGT]{0,8}", b in "[ACGT]{0,8}", cost in 0u32..3) {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let mut policy = OverrideCost::default();
        policy.register(b'A', b'G', cost);
        policy.register(b'C', b'T', cost);
        let row = Aligner::new(policy).align(s, t, false);
        let expected = full_table(
            s,
            t,
            false,
            |x, y| match (x, y) {
                (b'A', b'G') | (b'C', b'T') => cost,
                _ => unit(x, y),
            },
            |_| 1,
            |_| 1,
        );
        prop_assert_eq!(row.into_vec(), expected);
    }
}
