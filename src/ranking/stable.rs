//! In-place stable sort driven by a plain "should `a` come before `b`" predicate.
//!
//! The predicate does not have to be a strict weak ordering. To keep the output
//! reproducible for such predicates the comparison and swap sequence is fixed:
//! insertion sort over blocks of [`BLOCK_SIZE`] elements, then rounds of
//! symmetric in-place merging (SymMerge, Kim & Kutzner 2004) of neighbouring
//! runs, doubling the run length each round. Rotations are done with block swaps.

const BLOCK_SIZE: usize = 20;

/// Sorts `items` so that `less(a, b)` elements move ahead, keeping the input
/// order of pairs the predicate does not separate.
pub fn stable_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    let mut block = BLOCK_SIZE;

    let (mut a, mut b) = (0, block);
    while b <= n {
        insertion_sort(items, a, b, &mut less);
        a = b;
        b += block;
    }
    insertion_sort(items, a, n, &mut less);

    while block < n {
        let (mut a, mut b) = (0, 2 * block);
        while b <= n {
            sym_merge(items, a, a + block, b, &mut less);
            a = b;
            b += 2 * block;
        }
        let m = a + block;
        if m < n {
            sym_merge(items, a, m, n, &mut less);
        }
        block *= 2;
    }
}

fn insertion_sort<T, F>(items: &mut [T], a: usize, b: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in a + 1..b {
        let mut j = i;
        while j > a && less(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges the sorted runs `items[a..m]` and `items[m..b]` in place.
fn sym_merge<T, F>(items: &mut [T], a: usize, m: usize, b: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // A single element on the left: binary search its slot in the right run.
    if m - a == 1 {
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = (i + j) / 2;
            if less(&items[h], &items[a]) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            items.swap(k, k + 1);
        }
        return;
    }

    // A single element on the right: binary search its slot in the left run.
    if b - m == 1 {
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = (i + j) / 2;
            if !less(&items[m], &items[h]) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        let mut k = m;
        while k > i {
            items.swap(k, k - 1);
            k -= 1;
        }
        return;
    }

    let mid = (a + b) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = (start + r) / 2;
        if !less(&items[p - c], &items[c]) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(items, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(items, a, start, mid, less);
    }
    if mid < end && end < b {
        sym_merge(items, mid, end, b, less);
    }
}

/// Rotates `items[a..b]` so that `items[m..b]` ends up in front of `items[a..m]`.
fn rotate<T>(items: &mut [T], a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;

    while i != j {
        if i > j {
            swap_range(items, m - i, m, j);
            i -= j;
        } else {
            swap_range(items, m - i, m + j - i, i);
            j -= i;
        }
    }
    swap_range(items, m - i, m, i);
}

fn swap_range<T>(items: &mut [T], a: usize, b: usize, n: usize) {
    for i in 0..n {
        items.swap(a + i, b + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        stable_sort_by(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut single = vec![7];
        stable_sort_by(&mut single, |a, b| a < b);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_matches_std_sort_for_total_order() {
        // Large enough to go through several merge rounds.
        let mut items: Vec<(i32, usize)> = (0..237)
            .map(|i| (((i * 7919) % 31) as i32, i))
            .collect();
        let mut expected = items.clone();

        stable_sort_by(&mut items, |a, b| a.0 < b.0);
        expected.sort_by_key(|item| item.0);

        assert_eq!(items, expected);
    }

    #[test]
    fn test_stability_with_many_equal_keys() {
        let mut items: Vec<(u8, usize)> = (0..100).map(|i| ((i % 3) as u8, i)).collect();
        stable_sort_by(&mut items, |a, b| a.0 < b.0);

        for window in items.windows(2) {
            if window[0].0 == window[1].0 {
                assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn test_descending_input_is_reversed() {
        let mut items: Vec<i32> = (0..64).rev().collect();
        stable_sort_by(&mut items, |a, b| a < b);
        assert_eq!(items, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_rotate() {
        let mut items = vec![1, 2, 3, 4, 5, 6, 7];
        rotate(&mut items, 1, 3, 7);
        assert_eq!(items, vec![1, 4, 5, 6, 7, 2, 3]);
    }

    #[test]
    fn test_never_less_keeps_input() {
        let mut items: Vec<usize> = (0..50).collect();
        stable_sort_by(&mut items, |_, _| false);
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }
}
