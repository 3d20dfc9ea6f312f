//! Random site selection that avoids repeating the previous pick.
use rand::Rng;

use super::types::{Site, SiteId};

/// Picks a site uniformly at random, avoiding `excluded` whenever another
/// candidate exists.
///
/// Resampling is bounded by the candidate count; if every draw lands on the
/// excluded site, the choice falls back to a uniform pick among the others.
/// With a single candidate that candidate is always returned.
pub fn choose_site<'a, R: Rng + ?Sized>(
    candidates: &'a [Site],
    excluded: Option<SiteId>,
    rng: &mut R,
) -> Option<&'a Site> {
    match candidates.len() {
        0 => return None,
        1 => return candidates.first(),
        _ => {}
    }

    let Some(excluded) = excluded else {
        return candidates.get(rng.random_range(0..candidates.len()));
    };

    for _ in 0..candidates.len() {
        let pick = &candidates[rng.random_range(0..candidates.len())];
        if pick.id != excluded {
            return Some(pick);
        }
    }

    let others: Vec<&Site> = candidates
        .iter()
        .filter(|site| site.id != excluded)
        .collect();
    if others.is_empty() {
        return candidates.first();
    }
    Some(others[rng.random_range(0..others.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::types::SiteKind;
    use bevy::math::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn houses(count: u32) -> Vec<Site> {
        (0..count)
            .map(|i| {
                Site::new(
                    SiteId::new(i),
                    SiteKind::House,
                    format!("House {i}"),
                    Some(Vec3::new(i as f32 * 10.0, 0.0, 0.0)),
                )
            })
            .collect()
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(choose_site(&[], None, &mut rng).is_none());
    }

    #[test]
    fn single_candidate_is_reused_even_when_excluded() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let sites = houses(1);
        for _ in 0..10 {
            let pick = choose_site(&sites, Some(SiteId::new(0)), &mut rng).unwrap();
            assert_eq!(pick.id, SiteId::new(0));
        }
    }

    #[test]
    fn never_repeats_excluded_when_alternatives_exist() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let sites = houses(2);
        let mut previous = SiteId::new(0);
        for _ in 0..50 {
            let pick = choose_site(&sites, Some(previous), &mut rng).unwrap();
            assert_ne!(pick.id, previous);
            previous = pick.id;
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let sites = houses(5);
        let mut first = ChaCha20Rng::seed_from_u64(99);
        let mut second = ChaCha20Rng::seed_from_u64(99);

        let a: Vec<SiteId> = (0..20)
            .map(|_| choose_site(&sites, None, &mut first).unwrap().id)
            .collect();
        let b: Vec<SiteId> = (0..20)
            .map(|_| choose_site(&sites, None, &mut second).unwrap().id)
            .collect();
        assert_eq!(a, b);
    }
}
