//! Permutation enumeration for the Leibniz determinant.

/// Call `visit` once for every permutation of `0..n`.
///
/// Swap-based recursion; `n!` calls in total.
pub(crate) fn for_each_permutation<F>(n: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let mut indices: Vec<usize> = (0..n).collect();
    permute(&mut indices, 0, &mut visit);
}

fn permute<F>(arr: &mut [usize], start: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if start >= arr.len() {
        visit(arr);
        return;
    }
    for i in start..arr.len() {
        arr.swap(start, i);
        permute(arr, start + 1, visit);
        arr.swap(start, i);
    }
}

/// Number of pairs `i < j` with `perm[i] > perm[j]`, by pairwise comparison.
pub(crate) fn inversions(perm: &[usize]) -> usize {
    let mut count = 0;
    for i in 0..perm.len() {
        for j in (i + 1)..perm.len() {
            if perm[i] > perm[j] {
                count += 1;
            }
        }
    }
    count
}

/// Whether `sign(perm) = +1`.
#[inline]
pub(crate) fn is_even(perm: &[usize]) -> bool {
    inversions(perm) % 2 == 0
}
