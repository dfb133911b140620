//! Network components - cities, connections and their weights

use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Graph node
#[derive(Debug, Clone)]
pub struct City {
    /// Unique city name
    pub id: String,
    /// Position, x is longitude and y is latitude
    pub geometry: Point<f64>,
    /// Optional grouping label used by map front ends
    pub category: Option<String>,
}

/// Independent numeric cost attached to every connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDimension {
    /// Travel time
    Time,
    /// Ticket fare
    Cost,
}

impl WeightDimension {
    pub const ALL: [WeightDimension; 2] = [WeightDimension::Time, WeightDimension::Cost];

    /// The dimension that is not `self`
    pub fn other(self) -> Self {
        match self {
            WeightDimension::Time => WeightDimension::Cost,
            WeightDimension::Cost => WeightDimension::Time,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightDimension::Time => "time",
            WeightDimension::Cost => "cost",
        }
    }
}

impl fmt::Display for WeightDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightDimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(WeightDimension::Time),
            "cost" => Ok(WeightDimension::Cost),
            _ => Err(Error::UnknownDimension(s.to_string())),
        }
    }
}

/// Weights of a single connection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weights {
    pub time: f64,
    pub cost: f64,
}

impl Weights {
    pub fn new(time: f64, cost: f64) -> Self {
        Self { time, cost }
    }

    pub fn get(&self, dimension: WeightDimension) -> f64 {
        match dimension {
            WeightDimension::Time => self.time,
            WeightDimension::Cost => self.cost,
        }
    }

    /// Copy with one dimension replaced
    #[must_use]
    pub fn with(mut self, dimension: WeightDimension, value: f64) -> Self {
        match dimension {
            WeightDimension::Time => self.time = value,
            WeightDimension::Cost => self.cost = value,
        }
        self
    }
}

impl std::ops::Add for Weights {
    type Output = Weights;

    fn add(self, rhs: Weights) -> Weights {
        Weights {
            time: self.time + rhs.time,
            cost: self.cost + rhs.cost,
        }
    }
}

impl std::iter::Sum for Weights {
    fn sum<I: Iterator<Item = Weights>>(iter: I) -> Weights {
        iter.fold(Weights::default(), |acc, w| acc + w)
    }
}

/// Graph edge (railway line between two cities)
#[derive(Debug, Clone)]
pub struct Connection {
    pub weights: Weights,
}

impl Connection {
    pub fn weight(&self, dimension: WeightDimension) -> f64 {
        self.weights.get(dimension)
    }
}

/// One hop of a path with both weights read from the connection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub source: String,
    pub target: String,
    pub time: f64,
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parses_case_insensitively() {
        assert_eq!(
            "Time".parse::<WeightDimension>().unwrap(),
            WeightDimension::Time
        );
        assert_eq!(
            " cost ".parse::<WeightDimension>().unwrap(),
            WeightDimension::Cost
        );
    }

    #[test]
    fn unknown_dimension_is_rejected() {
        let err = "distance".parse::<WeightDimension>().unwrap_err();
        assert!(matches!(err, Error::UnknownDimension(name) if name == "distance"));
    }

    #[test]
    fn weights_sum_per_dimension() {
        let total: Weights = [Weights::new(1.5, 10.0), Weights::new(2.0, 5.0)]
            .into_iter()
            .sum();
        assert_eq!(total.get(WeightDimension::Time), 3.5);
        assert_eq!(total.get(WeightDimension::Cost), 15.0);
    }
}
