use dalec_enkf::prelude::*;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/dalec_drivers.OREGON.no_obs.csv".to_string());
    let mets = Met::read(&path)?;
    let radiation: Vec<f64> = mets.iter().map(|met| met.rad).collect();
    info!("read {} days of drivers from {}", mets.len(), path);
    info!("mean daily radiation {:.2} MJ m-2", utils::mean(&radiation));

    let mp = ModelParameters::oregon();
    let acm = AcmParameters::oregon();
    let config = Config::new();
    config.validate()?;
    info!(
        "{} members, {} state variables, seed {}",
        config.nrens, config.ndims, config.seed
    );
    info!("ACM constants fit for latitude {}, SLA {}", acm.lat, acm.sla);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = initialise_ensemble(&mp, &config, &mut rng)?;
    let q = initialise_error_covariance(&config, &mut rng);
    let rho = stochastic_model_error(1.0, 1.0, 1.0)?;
    info!("A is {:?}, Q is {:?}, rho = {}", a.dim(), q.dim(), rho);

    let summary = spread_summary(&a);
    for row in &summary {
        info!(
            "{:>4}: mean {:>10.4}, sd {:>10.4}",
            row.variable, row.mean, row.sd
        );
    }
    utils::record(&summary, "ensemble_spread.csv")?;

    let cf = a.row(StateVariable::Cf.index()).to_vec();
    plot::spread_histogram(&cf, 20, "ensemble_cf_hist.png")?;

    let quartiles =
        |var: StateVariable| plotters::data::Quartiles::new(&a.row(var.index()).to_vec());
    plot::whisker_for_pools(
        &quartiles(StateVariable::Cf),
        &quartiles(StateVariable::Cw),
        &quartiles(StateVariable::Cr),
        &quartiles(StateVariable::Cl),
        &quartiles(StateVariable::Cs),
        "ensemble_pools.png",
    )?;
    info!("wrote ensemble_spread.csv, ensemble_cf_hist.png, ensemble_pools.png");

    Ok(())
}
