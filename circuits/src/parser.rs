use chumsky::prelude::*;
use miette::*;

use crate::points::{Point, COORD_LIMIT};

/// One `x,y,z` triple per line, signed integers within [`COORD_LIMIT`].
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| match digits.parse::<i64>() {
            Ok(value) if value.unsigned_abs() <= COORD_LIMIT.unsigned_abs() => Ok(value),
            Ok(_) => Err(Rich::custom(
                span,
                format!("coordinate {digits} is outside +/-{COORD_LIMIT}"),
            )),
            Err(e) => Err(Rich::custom(span, format!("coordinate {digits}: {e}"))),
        });

    let point = coord
        .clone()
        .then_ignore(just(','))
        .then(coord.clone())
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| Point::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
        .padded()
}

pub fn points(input: &str) -> Result<Vec<Point>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
