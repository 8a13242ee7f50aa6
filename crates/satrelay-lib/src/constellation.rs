use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Vec3, EARTH_RADIUS_KM};

/// Identifier for a constellation point.
pub type SatId = String;

/// Reserved identifier for the route's starting terminal.
pub const START: &str = "START";
/// Reserved identifier for the route's destination terminal.
pub const GOAL: &str = "GOAL";

/// Altitude at which the route terminals are injected, in kilometres (one
/// metre). Lifting them off the surface keeps the line-of-sight march from
/// starting exactly on the sphere.
pub const ENDPOINT_ALTITUDE_KM: f64 = 0.001;

/// Positions of every constellation point, keyed by identifier. Terminals
/// parsed from a route record appear under [`START`] and [`GOAL`].
#[derive(Debug, Clone, Default)]
pub struct Constellation {
    positions: HashMap<SatId, Vec3>,
}

impl Constellation {
    pub fn position(&self, id: &str) -> Option<&Vec3> {
        self.positions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SatId, &Vec3)> {
        self.positions.iter()
    }

    /// Insert a point, replacing any previous position under the same id.
    pub fn insert(&mut self, id: SatId, position: Vec3) {
        self.positions.insert(id, position);
    }
}

/// Load a constellation dataset from a file.
pub fn load_constellation(path: &Path) -> Result<Constellation> {
    let file = File::open(path)?;
    parse_constellation(BufReader::new(file))
}

/// Parse the constellation dataset format.
///
/// The first line is a seed header and is skipped. Every following non-blank
/// line is comma-separated: four fields describe a satellite
/// (`ID,lat,lon,alt`), five fields describe the single route record
/// (`ROUTE,lat1,lon1,lat2,lon2`) whose two terminals are injected as
/// [`START`] and [`GOAL`] at [`ENDPOINT_ALTITUDE_KM`]. Any other shape is an
/// input error, as is a missing or repeated route record.
pub fn parse_constellation(reader: impl BufRead) -> Result<Constellation> {
    let mut constellation = Constellation::default();
    let mut route_seen = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        // seed header
        if number == 1 {
            continue;
        }

        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.split(',').collect();
        match fields.len() {
            4 => parse_satellite(&mut constellation, &fields, number)?,
            5 => {
                if route_seen {
                    return Err(Error::DuplicateRoute { line: number });
                }
                route_seen = true;
                parse_route(&mut constellation, &fields, number)?;
            }
            count => {
                return Err(Error::InvalidRecord {
                    line: number,
                    reason: format!("expected 4 or 5 fields, got {count}"),
                })
            }
        }
    }

    if !route_seen {
        return Err(Error::MissingRoute);
    }

    debug!(points = constellation.len(), "constellation parsed");
    Ok(constellation)
}

fn parse_satellite(constellation: &mut Constellation, fields: &[&str], line: usize) -> Result<()> {
    let id = fields[0].trim();
    if id == START || id == GOAL {
        return Err(Error::ReservedIdentifier {
            id: id.to_string(),
            line,
        });
    }
    if constellation.contains(id) {
        return Err(Error::DuplicateSatellite {
            id: id.to_string(),
            line,
        });
    }

    let latitude = parse_coordinate(fields[1], line, "latitude")?;
    let longitude = parse_coordinate(fields[2], line, "longitude")?;
    let altitude = parse_coordinate(fields[3], line, "altitude")?;

    constellation.insert(
        id.to_string(),
        Vec3::from_lat_lon(latitude, longitude, EARTH_RADIUS_KM, altitude),
    );
    Ok(())
}

fn parse_route(constellation: &mut Constellation, fields: &[&str], line: usize) -> Result<()> {
    let start_lat = parse_coordinate(fields[1], line, "start latitude")?;
    let start_lon = parse_coordinate(fields[2], line, "start longitude")?;
    let goal_lat = parse_coordinate(fields[3], line, "goal latitude")?;
    let goal_lon = parse_coordinate(fields[4], line, "goal longitude")?;

    constellation.insert(
        START.to_string(),
        Vec3::from_lat_lon(start_lat, start_lon, EARTH_RADIUS_KM, ENDPOINT_ALTITUDE_KM),
    );
    constellation.insert(
        GOAL.to_string(),
        Vec3::from_lat_lon(goal_lat, goal_lon, EARTH_RADIUS_KM, ENDPOINT_ALTITUDE_KM),
    );
    Ok(())
}

fn parse_coordinate(value: &str, line: usize, field: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| Error::InvalidRecord {
        line,
        reason: format!("{field} is not a number: {value}"),
    })
}
