//! Property tests for the generator and the three samplers.

use mcg_sampler::{
    BoundaryPolicy, GeneratorConfig, Sampler, SeedPolicy, arbitrary_discrete, generate,
    uniform_continuous, uniform_discrete,
};
use proptest::prelude::*;

fn modulus() -> impl Strategy<Value = i64> {
    prop_oneof![2_i64..1_000, 1_000_i64..i64::MAX]
}

/// Seeds inside `[0, m)` for a given modulus.
fn config() -> impl Strategy<Value = (i64, i64, i64)> {
    (modulus(), any::<i64>()).prop_flat_map(|(m, a)| (Just(m), Just(a), 0..m))
}

fn weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0_f64..1.0, 1..12).prop_map(|w| {
        let sum: f64 = w.iter().sum();
        if sum == 0.0 {
            vec![1.0 / w.len() as f64; w.len()]
        } else {
            w.iter().map(|x| x / sum).collect()
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generator_is_deterministic((m, a, s) in config(), n in 0_i64..200) {
        prop_assert_eq!(generate(m, a, s, n).unwrap(), generate(m, a, s, n).unwrap());
    }

    #[test]
    fn generated_terms_obey_range_and_recurrence(
        m in modulus(),
        a in any::<i64>(),
        seed in any::<i64>(),
        n in 0_i64..200,
    ) {
        // only the seed element may lie outside [0, m)
        let raw = generate(m, a, seed, n).unwrap();
        prop_assert_eq!(raw.len() as i64, n + 1);
        prop_assert_eq!(raw[0], seed);
        for w in raw.windows(2) {
            prop_assert!((0..m).contains(&w[1]));
            let expected = (i128::from(a) * i128::from(w[0])).rem_euclid(i128::from(m));
            prop_assert_eq!(i128::from(w[1]), expected);
        }
    }

    #[test]
    fn negative_counts_always_fail(m in modulus(), n in i64::MIN..0) {
        prop_assert!(generate(m, 7, 1, n).is_err());
    }

    #[test]
    fn uniform_discrete_stays_in_range(
        (m, a, s) in config(),
        c in 1_i64..1_000,
        n in 0_i64..200,
    ) {
        let cfg = GeneratorConfig::new(m, a, s).unwrap();
        let out = uniform_discrete(c, n, &cfg).unwrap();
        prop_assert_eq!(out.len() as i64, n + 1);
        prop_assert!(out.iter().all(|y| (0..c).contains(y)));
    }

    #[test]
    fn uniform_continuous_stays_in_range(
        (m, a, s) in config(),
        c in 1e-6_f64..1e6,
        n in 0_i64..200,
    ) {
        let cfg = GeneratorConfig::new(m, a, s).unwrap();
        let out = uniform_continuous(c, n, &cfg).unwrap();
        prop_assert_eq!(out.len() as i64, n + 1);
        // x < m, but x / m can round to 1.0 for moduli past 2^53
        prop_assert!(out.iter().all(|&y| (0.0..=c).contains(&y)));
        if m < 1 << 52 {
            prop_assert!(out.iter().all(|&y| y < c));
        }
    }

    #[test]
    fn categorical_indices_cover_the_vector(
        (m, a, s) in config(),
        w in weights(),
        n in 0_i64..200,
    ) {
        let cfg = GeneratorConfig::new(m, a, s).unwrap();
        let out = arbitrary_discrete(&w, n, &cfg).unwrap();
        prop_assert!(out.len() as i64 <= n + 1);
        prop_assert!(out.iter().all(|&j| j < w.len()));
    }

    #[test]
    fn clamped_boundaries_never_drop(
        (m, a, s) in config(),
        w in weights(),
        n in 0_i64..200,
    ) {
        let cfg = GeneratorConfig::new(m, a, s).unwrap();
        let out = Sampler::new(cfg)
            .boundary_policy(BoundaryPolicy::ClampFinal)
            .arbitrary_discrete(&w, n)
            .unwrap();
        prop_assert_eq!(out.len() as i64, n + 1);
    }

    #[test]
    fn seed_exclusive_is_the_inclusive_tail(
        (m, a, s) in config(),
        c in 1_i64..50,
        n in 0_i64..200,
    ) {
        let cfg = GeneratorConfig::new(m, a, s).unwrap();
        let inclusive = Sampler::new(cfg).uniform_discrete(c, n).unwrap();
        let exclusive = Sampler::new(cfg)
            .seed_policy(SeedPolicy::Exclusive)
            .uniform_discrete(c, n)
            .unwrap();
        prop_assert_eq!(&inclusive[1..], exclusive.as_slice());
    }
}
