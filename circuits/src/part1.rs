use miette::*;

use crate::config::Config;
use crate::parser;
use crate::points::PointStore;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, &Config::default())
}

#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, config: &Config) -> Result<String> {
    let points = PointStore::load_with(parser::points(input)?, config.duplicates);

    // Connect the `limit` closest pairs and multiply the three largest circuits
    let product = crate::cluster_bounded(&points, config.limit)?;

    Ok(product.to_string())
}
