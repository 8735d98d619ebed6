// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nearest staircase lookup.

use room_distances_geometry::{geodesic_distance, GeoPoint};

use crate::space::{Room, Space, Staircase};

/// Where a room leaves its floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint<'a> {
    Staircase(&'a Staircase),
    /// No staircase on the room's floor; the room stands in for one.
    Room(&'a Room),
}

impl Waypoint<'_> {
    pub fn centroid(&self) -> GeoPoint {
        match self {
            Waypoint::Staircase(s) => s.centroid,
            Waypoint::Room(r) => r.centroid,
        }
    }
}

/// Nearest staircase of a room and the walk to reach it, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStaircase<'a> {
    pub distance: f64,
    pub waypoint: Waypoint<'a>,
}

impl NearestStaircase<'_> {
    /// True when no staircase shares the room's building and floor.
    pub fn is_sentinel(&self) -> bool {
        matches!(self.waypoint, Waypoint::Room(_))
    }
}

/// Finds the staircase closest to `room` on the same building and floor.
///
/// Building and floor are compared by label. Without candidates the room
/// itself is returned at distance zero. Ties go to the first candidate in
/// `staircases` order.
pub fn nearest_staircase<'a>(room: &'a Room, staircases: &'a [Staircase]) -> NearestStaircase<'a> {
    let mut nearest: Option<NearestStaircase<'a>> = None;

    for staircase in staircases
        .iter()
        .filter(|s| s.building() == room.building() && s.floor() == room.floor())
    {
        let distance = geodesic_distance(room.centroid(), staircase.centroid());
        if nearest.map_or(true, |n| distance < n.distance) {
            nearest = Some(NearestStaircase {
                distance,
                waypoint: Waypoint::Staircase(staircase),
            });
        }
    }

    nearest.unwrap_or(NearestStaircase {
        distance: 0.0,
        waypoint: Waypoint::Room(room),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Floor;
    use approx::assert_relative_eq;

    fn room() -> Room {
        Room::new("A101", "A", Floor::new("1"), GeoPoint::new(48.7660, 11.4320))
    }

    #[test]
    fn test_no_staircase_returns_sentinel() {
        let room = room();
        let staircases = vec![
            Staircase::new("A", Floor::new("2"), GeoPoint::new(48.7661, 11.4321)),
            Staircase::new("B", Floor::new("1"), GeoPoint::new(48.7661, 11.4321)),
        ];
        let nearest = nearest_staircase(&room, &staircases);
        assert!(nearest.is_sentinel());
        assert_eq!(nearest.distance, 0.0);
        assert_eq!(nearest.waypoint.centroid(), room.centroid);
    }

    #[test]
    fn test_picks_closest_candidate() {
        let room = room();
        let far = Staircase::new("A", Floor::new("1"), GeoPoint::new(48.7670, 11.4320));
        let near = Staircase::new("A", Floor::new("1"), GeoPoint::new(48.7662, 11.4320));
        let staircases = vec![far, near.clone()];

        let nearest = nearest_staircase(&room, &staircases);
        assert_eq!(nearest.waypoint, Waypoint::Staircase(&staircases[1]));
        assert_relative_eq!(
            nearest.distance,
            geodesic_distance(room.centroid, near.centroid),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let room = room();
        let mut first = Staircase::new("A", Floor::new("1"), GeoPoint::new(48.7662, 11.4320));
        first.name = Some("first".into());
        let mut second = first.clone();
        second.name = Some("second".into());
        let staircases = vec![first, second];

        match nearest_staircase(&room, &staircases).waypoint {
            Waypoint::Staircase(s) => assert_eq!(s.name.as_deref(), Some("first")),
            Waypoint::Room(_) => panic!("expected a staircase"),
        }
    }

    #[test]
    fn test_floor_compared_by_label() {
        let room = room();
        let staircases = vec![Staircase::new(
            "A",
            Floor::new("1.0"),
            GeoPoint::new(48.7662, 11.4320),
        )];
        assert!(nearest_staircase(&room, &staircases).is_sentinel());
    }
}
