//! Route ranking
//!
//! Pure views over a [`RouteSet`]: each ranking sorts references to the
//! routes and never touches the set itself, so rankings can be recomputed as
//! often as needed without searching again.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::search::{Route, RouteSet};

/// Cost a ranking orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Fare,
    Time,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Distance, Metric::Fare, Metric::Time];

    /// The route total this metric orders by
    pub fn key(self, route: &Route) -> u64 {
        match self {
            Metric::Distance => route.total_distance(),
            Metric::Fare => route.total_fare(),
            Metric::Time => route.total_time(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Fare => write!(f, "fare"),
            Metric::Time => write!(f, "time"),
        }
    }
}

/// How many routes each ranking keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankLimits {
    pub distance: usize,
    pub fare: usize,
    pub time: usize,
}

impl Default for RankLimits {
    fn default() -> Self {
        Self {
            distance: 5,
            fare: 5,
            time: 3,
        }
    }
}

impl RankLimits {
    pub fn for_metric(&self, metric: Metric) -> usize {
        match metric {
            Metric::Distance => self.distance,
            Metric::Fare => self.fare,
            Metric::Time => self.time,
        }
    }
}

/// The `top` cheapest routes by `metric`, ascending.
///
/// The sort is stable: routes with equal cost keep their discovery order.
pub fn rank(routes: &[Route], metric: Metric, top: usize) -> Vec<&Route> {
    let mut ranked: Vec<&Route> = routes.iter().collect();
    ranked.sort_by_key(|route| metric.key(route));
    ranked.truncate(top);
    ranked
}

/// Top routes of a search under each metric
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedRoutes {
    pub by_distance: Vec<Route>,
    pub by_fare: Vec<Route>,
    pub by_time: Vec<Route>,
    /// Routes found before ranking
    pub total_found: usize,
    /// The search stopped at its route-count bound
    pub limit_reached: bool,
}

impl RankedRoutes {
    pub fn from_set(set: &RouteSet, limits: &RankLimits) -> Self {
        let view = |metric: Metric| -> Vec<Route> {
            rank(&set.routes, metric, limits.for_metric(metric))
                .into_iter()
                .cloned()
                .collect()
        };

        Self {
            by_distance: view(Metric::Distance),
            by_fare: view(Metric::Fare),
            by_time: view(Metric::Time),
            total_found: set.len(),
            limit_reached: set.limit_reached,
        }
    }

    /// The ranking for one metric
    pub fn view(&self, metric: Metric) -> &[Route] {
        match metric {
            Metric::Distance => &self.by_distance,
            Metric::Fare => &self.by_fare,
            Metric::Time => &self.by_time,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }
}
