use dalec_enkf::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_setup_produces_a_healthy_ensemble() {
    let mp = ModelParameters::oregon();
    let config = Config::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = initialise_ensemble(&mp, &config, &mut rng).unwrap();
    let q = initialise_error_covariance(&config, &mut rng);

    assert_eq!(a.dim(), (16, 200));
    assert_eq!(q.dim(), (16, 200));
    assert!(a.iter().all(|x| x.is_finite()));
    assert!(q.iter().all(|x| x.is_finite()));

    // members are independent draws, so no two columns should coincide
    for j in 0..config.nrens {
        for k in (j + 1)..config.nrens {
            assert_ne!(a.column(j), a.column(k));
        }
    }

    let rho = stochastic_model_error(1.0, 1.0, 1.0).unwrap();
    assert_eq!(rho, 1.0);
}

#[test]
fn the_whole_setup_is_reproducible() {
    let mp = ModelParameters::oregon();
    let config = Config::new().seed(1004);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let a1 = initialise_ensemble(&mp, &config, &mut rng).unwrap();
    let q1 = initialise_error_covariance(&config, &mut rng);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let a2 = initialise_ensemble(&mp, &config, &mut rng).unwrap();
    let q2 = initialise_error_covariance(&config, &mut rng);

    assert_eq!(a1, a2);
    assert_eq!(q1, q2);
}

#[test]
fn summaries_track_the_reference_scales() {
    let mp = ModelParameters::oregon();
    let config = Config::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = initialise_ensemble(&mp, &config, &mut rng).unwrap();

    let summary = spread_summary(&a);
    assert_eq!(summary.len(), 16);
    // soil carbon is the largest pool, so its row should spread the widest
    let widest = summary
        .iter()
        .max_by(|x, y| x.sd.partial_cmp(&y.sd).unwrap())
        .unwrap();
    assert_eq!(widest.variable, "cs");
}

#[test]
fn the_packaged_drivers_load() {
    let mets = Met::read("data/dalec_drivers.OREGON.no_obs.csv").unwrap();
    assert_eq!(mets.len(), 31);
    assert!(mets.iter().all(|met| met.doy >= 1.0));
    assert!(mets.iter().all(|met| met.maxt >= met.mint));
    assert!(mets.iter().all(|met| met.ca > 300.0));
    assert!(mets.iter().all(|met| met.rad > 0.0));
}
