/// All orderings of `tokens`, built by insertion.
///
/// The tail is permuted first and the head token is then inserted at every
/// position of each tail permutation, left to right. For `[A, B, C]` this
/// gives ABC, BAC, BCA, ACB, CAB, CBA. Equal tokens are still treated as
/// distinct, so the result always holds `n!` entries. That grows quickly:
/// ten surnames already mean over three million orderings.
pub fn permutations<T: Copy>(tokens: &[T]) -> Vec<Vec<T>> {
    let Some((&head, tail)) = tokens.split_first() else {
        return vec![Vec::new()];
    };

    let tail_perms = permutations(tail);
    let mut perms = Vec::with_capacity(tail_perms.len() * tokens.len());
    for perm in tail_perms {
        for pos in 0..=perm.len() {
            let mut inserted = Vec::with_capacity(tokens.len());
            inserted.extend_from_slice(&perm[..pos]);
            inserted.push(head);
            inserted.extend_from_slice(&perm[pos..]);
            perms.push(inserted);
        }
    }

    perms
}
