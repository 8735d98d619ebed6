// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walking distance estimate between two rooms.
//!
//! The model is piecewise:
//!
//! - **Same room**: 0.
//! - **Different buildings**: walk to the nearest staircase in each room's
//!   building, a per-level penalty on each room's absolute floor number, and
//!   the surface distance between the two staircases.
//! - **Same building, different floor**: walk from the first room to its
//!   nearest staircase, a per-level penalty on the floor difference, and the
//!   surface distance from that staircase to the second room.
//! - **Same building and floor**: surface distance between the rooms.
//!
//! Only the first room's staircase is used in the cross-floor case, so that
//! estimate is not symmetric in general. The cross-building penalty uses raw
//! floor numbers, so below-ground floors reduce the total.

use room_distances_geometry::geodesic_distance;

use crate::config::DistanceConfig;
use crate::error::{Error, Result};
use crate::locator::{nearest_staircase, NearestStaircase};
use crate::space::{Room, Staircase};

/// Which branch of the model applies to a pair of rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    SameRoom,
    CrossBuilding,
    CrossFloor,
    SameFloor,
}

impl RouteKind {
    /// Decides the branch; rooms are matched by name first, then building,
    /// then floor label.
    pub fn of(a: &Room, b: &Room) -> Self {
        if a.name == b.name {
            RouteKind::SameRoom
        } else if a.building != b.building {
            RouteKind::CrossBuilding
        } else if a.floor != b.floor {
            RouteKind::CrossFloor
        } else {
            RouteKind::SameFloor
        }
    }
}

/// Estimates distances against a fixed set of staircases.
#[derive(Debug, Clone, Copy)]
pub struct DistanceEstimator<'a> {
    staircases: &'a [Staircase],
    floor_penalty: f64,
}

impl<'a> DistanceEstimator<'a> {
    pub fn new(staircases: &'a [Staircase], config: &DistanceConfig) -> Self {
        Self {
            staircases,
            floor_penalty: config.floor_penalty_meters,
        }
    }

    /// Nearest staircase of `room` among this estimator's staircases.
    pub fn nearest(&self, room: &'a Room) -> NearestStaircase<'a> {
        nearest_staircase(room, self.staircases)
    }

    /// Estimated walk from `a` to `b` in whole meters, rounded up.
    pub fn estimate(&self, a: &'a Room, b: &'a Room) -> Result<i64> {
        self.estimate_with(a, &self.nearest(a), b, &self.nearest(b))
    }

    /// Same as [`estimate`](Self::estimate) with precomputed nearest staircases.
    pub fn estimate_with(
        &self,
        a: &Room,
        near_a: &NearestStaircase<'_>,
        b: &Room,
        near_b: &NearestStaircase<'_>,
    ) -> Result<i64> {
        let kind = RouteKind::of(a, b);
        if kind == RouteKind::SameRoom {
            return Ok(0);
        }
        checked_centroid(a)?;
        checked_centroid(b)?;

        let total = match kind {
            RouteKind::SameRoom => 0.0,
            RouteKind::CrossBuilding => {
                near_a.distance
                    + a.level()? * self.floor_penalty
                    + near_b.distance
                    + b.level()? * self.floor_penalty
                    + geodesic_distance(near_a.waypoint.centroid(), near_b.waypoint.centroid())
            }
            RouteKind::CrossFloor => {
                near_a.distance
                    + (a.level()? - b.level()?).abs() * self.floor_penalty
                    + geodesic_distance(b.centroid, near_a.waypoint.centroid())
            }
            RouteKind::SameFloor => geodesic_distance(a.centroid, b.centroid),
        };

        if !total.is_finite() {
            return Err(Error::InvalidGeometry {
                feature: format!("rooms '{}' and '{}'", a.name, b.name),
                source: room_distances_geometry::Error::InvalidGeometry(
                    "estimated distance is not finite".into(),
                ),
            });
        }

        Ok(total.ceil() as i64)
    }
}

fn checked_centroid(room: &Room) -> Result<()> {
    room.centroid
        .validate()
        .map(|_| ())
        .map_err(|source| Error::InvalidGeometry {
            feature: format!("room '{}'", room.name),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Floor;
    use room_distances_geometry::GeoPoint;

    fn room(name: &str, building: &str, floor: &str, lat: f64, lon: f64) -> Room {
        Room::new(name, building, Floor::new(floor), GeoPoint::new(lat, lon))
    }

    #[test]
    fn test_route_kind_precedence() {
        let a = room("X", "A", "0", 48.0, 11.0);
        assert_eq!(RouteKind::of(&a, &room("X", "B", "3", 48.0, 11.0)), RouteKind::SameRoom);
        assert_eq!(RouteKind::of(&a, &room("Y", "B", "0", 48.0, 11.0)), RouteKind::CrossBuilding);
        assert_eq!(RouteKind::of(&a, &room("Y", "A", "1", 48.0, 11.0)), RouteKind::CrossFloor);
        assert_eq!(RouteKind::of(&a, &room("Y", "A", "0", 48.0, 11.0)), RouteKind::SameFloor);
    }

    #[test]
    fn test_same_name_is_zero_even_when_far_apart() {
        let config = DistanceConfig::default();
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("X", "A", "0", 48.0, 11.0);
        let b = room("X", "B", "4", 48.1, 11.1);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), 0);
    }

    #[test]
    fn test_same_floor_is_direct_distance() {
        let config = DistanceConfig::default();
        let stairs = vec![Staircase::new("A", Floor::new("0"), GeoPoint::new(48.7700, 11.4400))];
        let estimator = DistanceEstimator::new(&stairs, &config);
        let a = room("A001", "A", "0", 48.7660, 11.4320);
        let b = room("A002", "A", "0", 48.7663, 11.4325);

        let direct = geodesic_distance(a.centroid, b.centroid);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), direct.ceil() as i64);
    }

    #[test]
    fn test_cross_floor_formula() {
        let config = DistanceConfig::default();
        let stair = Staircase::new("A", Floor::new("0"), GeoPoint::new(48.7661, 11.4320));
        let stairs = vec![stair.clone()];
        let estimator = DistanceEstimator::new(&stairs, &config);
        let a = room("A001", "A", "0", 48.7660, 11.4320);
        let b = room("A201", "A", "2", 48.7664, 11.4326);

        let expected = geodesic_distance(a.centroid, stair.centroid)
            + 2.0 * 5.0
            + geodesic_distance(b.centroid, stair.centroid);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), expected.ceil() as i64);
    }

    #[test]
    fn test_cross_floor_is_not_symmetric_in_general() {
        let config = DistanceConfig::default();
        // Staircase only on floor 0, far from both rooms.
        let stairs = vec![Staircase::new("A", Floor::new("0"), GeoPoint::new(48.7700, 11.4320))];
        let estimator = DistanceEstimator::new(&stairs, &config);
        let a = room("A001", "A", "0", 48.7660, 11.4320);
        let b = room("A201", "A", "2", 48.7661, 11.4320);

        let forward = estimator.estimate(&a, &b).unwrap();
        let backward = estimator.estimate(&b, &a).unwrap();
        // b has no staircase on its floor, so b -> a is the direct leg plus penalty.
        let direct = geodesic_distance(a.centroid, b.centroid);
        assert_eq!(backward, (direct + 10.0).ceil() as i64);
        assert!(forward > backward);
    }

    #[test]
    fn test_cross_building_formula() {
        let config = DistanceConfig::default();
        let sa = Staircase::new("A", Floor::new("1"), GeoPoint::new(48.7661, 11.4320));
        let sb = Staircase::new("B", Floor::new("2"), GeoPoint::new(48.7671, 11.4340));
        let stairs = vec![sa.clone(), sb.clone()];
        let estimator = DistanceEstimator::new(&stairs, &config);
        let a = room("A101", "A", "1", 48.7660, 11.4320);
        let b = room("B201", "B", "2", 48.7672, 11.4341);

        let between = geodesic_distance(sa.centroid, sb.centroid);
        let expected = geodesic_distance(a.centroid, sa.centroid)
            + 1.0 * 5.0
            + geodesic_distance(b.centroid, sb.centroid)
            + 2.0 * 5.0
            + between;
        let total = estimator.estimate(&a, &b).unwrap();
        assert_eq!(total, expected.ceil() as i64);
        assert!(total as f64 >= between);
    }

    #[test]
    fn test_cross_building_without_staircases_uses_room_centroids() {
        let config = DistanceConfig::default();
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("A001", "A", "0", 48.7660, 11.4320);
        let b = room("B001", "B", "0", 48.7670, 11.4340);
        let direct = geodesic_distance(a.centroid, b.centroid);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), direct.ceil() as i64);
    }

    #[test]
    fn test_basement_reduces_cross_building_total() {
        let config = DistanceConfig::default();
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("A-101", "A", "-1", 48.7660, 11.4320);
        let b = room("B001", "B", "0", 48.7660, 11.4320);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), -5);
    }

    #[test]
    fn test_non_numeric_floor_fails_for_cross_floor_pair() {
        let config = DistanceConfig::default();
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("A001", "A", "EG", 48.7660, 11.4320);
        let b = room("A101", "A", "1", 48.7661, 11.4320);
        assert!(matches!(
            estimator.estimate(&a, &b),
            Err(Error::InvalidRoomData { .. })
        ));
    }

    #[test]
    fn test_configured_floor_penalty() {
        let config = DistanceConfig {
            floor_penalty_meters: 10.0,
            ..Default::default()
        };
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("A001", "A", "0", 48.7660, 11.4320);
        let b = room("A301", "A", "3", 48.7660, 11.4320);
        assert_eq!(estimator.estimate(&a, &b).unwrap(), 30);
    }

    #[test]
    fn test_out_of_range_centroid_is_not_rounded_to_zero() {
        let config = DistanceConfig::default();
        let estimator = DistanceEstimator::new(&[], &config);
        let a = room("A001", "A", "0", 95.0, 11.0);
        let b = room("A002", "A", "0", 48.0, 11.0);
        assert!(matches!(
            estimator.estimate(&a, &b),
            Err(Error::InvalidGeometry { .. })
        ));
    }
}
