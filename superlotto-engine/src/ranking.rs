use std::cmp::Ordering;

/// Les `k` numéros de plus fort poids, ex æquo départagés par numéro croissant.
/// Le résultat est trié par numéro croissant.
pub fn top_k(dist: &[f64], k: usize) -> Vec<u8> {
    select(dist, k, |a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
}

/// Les `k` numéros de plus faible poids, mêmes règles que [`top_k`].
pub fn bottom_k(dist: &[f64], k: usize) -> Vec<u8> {
    select(dist, k, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

fn select(dist: &[f64], k: usize, by_weight: impl Fn(&f64, &f64) -> Ordering) -> Vec<u8> {
    let mut indices: Vec<usize> = (0..dist.len()).collect();
    indices.sort_by(|&a, &b| by_weight(&dist[a], &dist[b]).then(a.cmp(&b)));

    let mut picked: Vec<u8> = indices
        .into_iter()
        .take(k)
        .map(|idx| (idx + 1) as u8)
        .collect();
    picked.sort_unstable();
    picked
}
