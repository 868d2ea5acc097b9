//! Line-oriented point input and route output.
//!
//! Input has one point per line with coordinates separated by whitespace.
//! Blank lines are ignored. Output mirrors the input format.

use crate::error::{Result, RouteError};
use crate::geometry::Point;
use crate::models::Route;

/// Parses one point per non-blank line.
///
/// With `dimension = Some(d)`, every point must have `d` coordinates;
/// otherwise the first point fixes the dimension.
///
/// # Errors
///
/// [`RouteError::InvalidDimension`] for `Some(0)`, and
/// [`RouteError::Parse`] for unparsable or non-finite numbers and for lines
/// of the wrong dimension.
///
/// # Examples
///
/// ```
/// use u_turnroute::io::parse_points;
///
/// let points = parse_points("0 0\n1 0.5\n\n-2 3\n", Some(2)).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].coords(), &[1.0, 0.5]);
/// assert!(parse_points("1 2\n3\n", None).is_err());
/// ```
pub fn parse_points(text: &str, dimension: Option<usize>) -> Result<Vec<Point>> {
    if dimension == Some(0) {
        return Err(RouteError::InvalidDimension(0));
    }
    let mut expected = dimension;
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let coords = line
            .split_whitespace()
            .map(|tok| parse_coordinate(tok, line_no))
            .collect::<Result<Vec<f64>>>()?;
        let want = *expected.get_or_insert(coords.len());
        if coords.len() != want {
            return Err(RouteError::Parse {
                line: line_no,
                message: format!("expected {want} coordinates, found {}", coords.len()),
            });
        }
        points.push(Point::new(coords));
    }
    Ok(points)
}

fn parse_coordinate(tok: &str, line: usize) -> Result<f64> {
    let value: f64 = tok.parse().map_err(|_| RouteError::Parse {
        line,
        message: format!("invalid number {tok:?}"),
    })?;
    if !value.is_finite() {
        return Err(RouteError::Parse {
            line,
            message: format!("non-finite coordinate {tok:?}"),
        });
    }
    Ok(value)
}

/// Formats a route as one point per line, coordinates separated by spaces.
pub fn format_route(route: &Route) -> String {
    format_points(route.points())
}

/// Formats points in the input format accepted by [`parse_points`].
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&p.to_string());
        out.push('\n');
    }
    out
}
