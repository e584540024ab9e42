use miette::*;

use crate::config::Config;
use crate::parser;
use crate::points::PointStore;
use crate::query::{full_connectivity_answer, x_product};
use crate::Circuits;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, &Config::default())
}

#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, config: &Config) -> Result<String> {
    let points = PointStore::load_with(parser::points(input)?, config.duplicates);

    // Keep connecting until every junction box shares one circuit
    let state = Circuits::new(&points).connected()?;
    let result = full_connectivity_answer(&state, &points, x_product)?;

    Ok(result.to_string())
}
