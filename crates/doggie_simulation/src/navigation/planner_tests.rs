//! Tests for the path planner adapter.

#[cfg(test)]
mod tests {
    use super::super::path::{ActivePath, PathFollower};
    use super::super::planner::{request_path, NavMeshProvider, PathConstraints, PlanOutcome};
    use bevy::prelude::*;

    /// Navmesh, отдающий заранее заданный ответ
    struct FixedNavMesh {
        loaded: bool,
        route: Option<Vec<Vec3>>,
    }

    impl NavMeshProvider for FixedNavMesh {
        fn is_loaded(&self) -> bool {
            self.loaded
        }

        fn build_path(&self, _start: Vec3, _end: Vec3, _constraints: &PathConstraints) -> Option<Vec<Vec3>> {
            self.route.clone()
        }
    }

    fn stale_follower() -> PathFollower {
        PathFollower {
            path: Some(ActivePath {
                waypoints: vec![Vec3::X, Vec3::Z],
                cursor: 1,
            }),
            since_replan: 3.0,
        }
    }

    #[test]
    fn test_path_constraints_default() {
        let constraints = PathConstraints::default();
        assert_eq!(constraints.max_climb, 16.0);
        assert_eq!(constraints.max_drop, 16.0);
        assert_eq!(constraints.step_height, 16.0);
        assert!(constraints.max_distance >= 99_999_999.0);
        assert!(constraints.allow_partial);
    }

    #[test]
    fn test_missing_navmesh_is_unavailable() {
        let mut follower = PathFollower { since_replan: 0.5, ..Default::default() };

        let outcome = request_path(&mut follower, None, Vec3::ZERO, Vec3::X, &PathConstraints::default());

        assert_eq!(outcome, PlanOutcome::Unavailable);
        assert_eq!(follower.since_replan, 0.0);
        assert!(!follower.has_path());
    }

    #[test]
    fn test_unloaded_navmesh_leaves_path_untouched() {
        let navmesh = FixedNavMesh { loaded: false, route: Some(vec![Vec3::Y]) };
        let mut follower = stale_follower();

        let outcome = request_path(&mut follower, Some(&navmesh), Vec3::ZERO, Vec3::X, &PathConstraints::default());

        assert_eq!(outcome, PlanOutcome::Unavailable);
        assert_eq!(follower.since_replan, 0.0);
        assert_eq!(follower.path.as_ref().map(ActivePath::cursor), Some(1));
    }

    #[test]
    fn test_planned_path_resets_cursor() {
        let route = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
        let navmesh = FixedNavMesh { loaded: true, route: Some(route.clone()) };
        let mut follower = stale_follower();

        let outcome = request_path(&mut follower, Some(&navmesh), Vec3::ZERO, Vec3::X, &PathConstraints::default());

        assert_eq!(outcome, PlanOutcome::Planned);
        let path = follower.path.as_ref().expect("path planned");
        assert_eq!(path.cursor(), 0);
        assert_eq!(path.waypoints(), route.as_slice());
    }

    #[test]
    fn test_no_route_falls_back_to_steering() {
        for route in [None, Some(Vec::new())] {
            let navmesh = FixedNavMesh { loaded: true, route };
            let mut follower = stale_follower();

            let outcome =
                request_path(&mut follower, Some(&navmesh), Vec3::ZERO, Vec3::X, &PathConstraints::default());

            assert_eq!(outcome, PlanOutcome::NoRoute);
            assert!(!follower.has_path());
        }
    }
}
