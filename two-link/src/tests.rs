use crate::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::{f64::consts::PI, time::Duration};

const TARGETS: &[[f64; 2]] = &[
    [4., 3.],
    [-4., 3.],
    [-4., -3.],
    [4., -3.],
    [0., 4.],
    [0., -6.],
    [7.5, 0.5],
    [-2.1, 0.1],
    [3., 0.],
];

#[test]
fn workspace_bounds() {
    let b = compute_bounds(5., 3.);
    assert_eq!(b, WorkspaceBounds { outer_radius: 8., inner_radius: 2. });
    assert_eq!(compute_bounds(3., 5.), b);
    assert!(is_inside_workspace(5., 3., 4., 3.));
    // Exactly on the circles
    assert!(!is_inside_workspace(5., 3., 8., 0.));
    assert!(!is_inside_workspace(5., 3., 0., -2.));
    assert!(!is_inside_workspace(5., 3., 1., 0.));
    assert!(!is_inside_workspace(5., 3., 9., 0.));
    // Equal links reach everything but the origin
    assert!(is_inside_workspace(5., 5., 0.001, 0.));
    assert!(!is_inside_workspace(5., 5., 0., 0.));
}

#[test]
fn area_and_lengths() {
    assert!(fits_in_area(100., 50., 300., 400.));
    assert!(!fits_in_area(100., 51., 300., 400.));
    assert!(!fits_in_area(100., 51., 400., 300.));
    assert_eq!(LinkLengths::new(0., 3.), Err(Error::NonPositiveLength));
    assert_eq!(LinkLengths::new(3., -1.), Err(Error::NonPositiveLength));
    assert_eq!(LinkLengths::new(f64::NAN, 1.), Err(Error::NonPositiveLength));
    let arm = TwoLink::new(200., 300., Direction::Clockwise).unwrap();
    assert!(matches!(
        arm.check_area(800., 600.),
        Err(Error::ExceedArea { reach, .. }) if reach == 500.
    ));
    assert!(arm.check_area(1000., 1200.).is_ok());
}

#[test]
fn atn2_range() {
    assert_abs_diff_eq!(atn2(1., 0.), 0., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(1., 1.), PI / 4., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(-1., 1.), 3. * PI / 4., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(-1., -1.), 5. * PI / 4., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(1., -1.), 7. * PI / 4., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(0.00001, 2.), PI / 2., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(0., -2.), 3. * PI / 2., epsilon = 1e-12);
    assert_abs_diff_eq!(atn2(0., 0.), 3. * PI / 2., epsilon = 1e-12);
}

#[test]
fn direction_parse() {
    assert_eq!("CW".parse::<Direction>().unwrap(), Direction::Clockwise);
    assert_eq!("counterclockwise".parse::<Direction>().unwrap(), Direction::CounterClockwise);
    assert_eq!(Direction::try_from(1).unwrap(), Direction::Clockwise);
    assert!(Direction::try_from(2).is_err());
    assert!("left".parse::<Direction>().is_err());
    assert_eq!(Direction::Clockwise.rev(), Direction::CounterClockwise);
}

#[test]
fn elbow_candidates_on_both_circles() {
    for &(l1, l2) in &[(5., 3.), (3., 5.), (5., 5.)] {
        for &[x, y] in TARGETS {
            if !is_inside_workspace(l1, l2, x, y) {
                continue;
            }
            let SolutionPair { a, b } = solve_elbow(l1, l2, x, y);
            for c in [a, b] {
                assert_abs_diff_eq!(c.norm(), l1, epsilon = 1e-6);
                assert_abs_diff_eq!([x, y].dist(&c), l2, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn elbow_vertical_target() {
    let SolutionPair { a, b } = solve_elbow(5., 3., 0., 4.);
    assert_abs_diff_eq!(a[0], 3., epsilon = 1e-12);
    assert_abs_diff_eq!(a[1], 4., epsilon = 1e-12);
    assert_abs_diff_eq!(b[0], -3., epsilon = 1e-12);
    assert_abs_diff_eq!(b[1], 4., epsilon = 1e-12);
}

#[test]
fn elbow_near_vertical_target() {
    let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
    for x in [1e-9, 1e-8, 1e-7, 1e-6, 1e-5, 1e-4] {
        for t in [[x, 4.], [-x, 4.], [x, -4.], [-x, -4.]] {
            let SolutionPair { a, b } = solve_elbow(5., 3., t[0], t[1]);
            for c in [a, b] {
                assert_abs_diff_eq!(c.norm(), 5., epsilon = 1e-9);
                assert_abs_diff_eq!(t.dist(&c), 3., epsilon = 1e-9);
            }
            // Two distinct elbows
            assert_abs_diff_eq!(a.dist(&b), 6., epsilon = 1e-6);
            assert!(arm.pose(t).unwrap().is_consistent(5., 3., 1e-9));
        }
    }
}

#[test]
fn select_matches_forward() {
    for dir in [Direction::Clockwise, Direction::CounterClockwise] {
        for &[x, y] in TARGETS {
            if !is_inside_workspace(5., 3., x, y) {
                continue;
            }
            let sol = solve_elbow(5., 3., x, y);
            let elbow = select_by_direction(x, y, &sol, dir);
            // Idempotent
            assert_eq!(elbow, select_by_direction(x, y, &sol, dir));
            assert_eq!(turn_of(elbow, [x, y]), dir);
            let fwd = forward_elbow(x, y, 5., 3., dir).unwrap();
            assert_abs_diff_eq!(elbow[0], fwd[0], epsilon = 1e-6);
            assert_abs_diff_eq!(elbow[1], fwd[1], epsilon = 1e-6);
        }
    }
}

#[test]
fn forward_boundary() {
    // Outer boundary
    let elbow = forward_elbow(8., 0., 5., 3., Direction::Clockwise).unwrap();
    assert_abs_diff_eq!(elbow[0], 5., epsilon = 1e-9);
    assert_abs_diff_eq!(elbow[1], 0., epsilon = 1e-9);
    // Inner boundary, elbow and target are colinear
    let elbow = forward_elbow(2., 0., 5., 3., Direction::CounterClockwise).unwrap();
    assert_abs_diff_eq!(elbow[0], 5., epsilon = 1e-9);
    assert_abs_diff_eq!(elbow[1], 0., epsilon = 1e-9);
    // Rounding pushes the cosine over 1
    let elbow = forward_elbow(0.1 + 0.2, 0., 0.1, 0.2, Direction::Clockwise).unwrap();
    assert!(elbow.is_finite());
    assert_abs_diff_eq!(elbow[0], 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(elbow[1], 0., epsilon = 1e-12);
}

#[test]
fn forward_unreachable() {
    assert_eq!(forward_elbow(1., 0., 5., 3., Direction::Clockwise), Err(Error::Unreachable));
    assert_eq!(forward_elbow(8.5, 0., 5., 3., Direction::Clockwise), Err(Error::Unreachable));
    assert_eq!(forward_elbow(0., 0., 5., 5., Direction::Clockwise), Err(Error::Unreachable));
}

#[test]
fn arm_pose() {
    let arm = TwoLink::new(5., 3., Direction::CounterClockwise).unwrap();
    assert_eq!(arm.pose([0., 0.]), Err(Error::DegenerateTarget));
    assert_eq!(arm.pose([1., 0.]), Err(Error::OutsideWorkspace));
    assert_eq!(arm.pose([8., 0.]), Err(Error::OutsideWorkspace));
    let pose = arm.pose([4., 3.]).unwrap();
    assert!(pose.is_consistent(5., 3., 1e-6));
    assert_eq!(turn_of(pose.elbow, pose.end_effector), Direction::CounterClockwise);
    let pair = arm.candidates([4., 3.]).unwrap();
    assert!(pose.elbow == pair.a || pose.elbow == pair.b);
}

#[test]
fn move_through_origin() {
    let check = validate_move(5., 5., [4., 0.], [-4., 0.]);
    assert!(!check.valid);
    assert_eq!(check.intersections, None);
    // Not antipodal, the line still touches the origin
    assert!(validate_move(5., 5., [4., 0.], [-2., 0.]).valid);
    assert!(validate_move(5., 5., [4., 1.], [-4., 2.]).valid);
}

#[test]
fn move_crossing_inner_circle() {
    let check = validate_move(5., 3., [4., 3.], [-4., -3.]);
    assert!(!check.valid);
    let [s1, s2] = check.intersections.unwrap();
    assert_abs_diff_eq!(s1[0], 1.6, epsilon = 1e-12);
    assert_abs_diff_eq!(s1[1], 1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(s2[0], -1.6, epsilon = 1e-12);
    assert_abs_diff_eq!(s2[1], -1.2, epsilon = 1e-12);
    assert!(matches!(
        check.into_result(),
        Err(Error::InvalidMove { intersections: Some(_) })
    ));
}

#[test]
fn move_beside_inner_circle() {
    // The line crosses, the segment does not
    let check = validate_move(5., 3., [4., 0.], [6., 0.]);
    assert!(check.valid);
    assert!(check.intersections.is_some());
    // The line misses
    let check = validate_move(5., 3., [4., 3.], [5., 3.]);
    assert_eq!(check, MoveCheck { valid: true, intersections: None });
}

#[test]
fn move_vertical() {
    assert!(validate_move(5., 3., [3., 1.], [3., -1.]).valid);
    let check = validate_move(5., 3., [0., 3.], [0., -3.]);
    assert!(!check.valid);
    assert_eq!(check.intersections, Some([[0., 2.], [0., -2.]]));
    assert!(validate_move(5., 3., [0., 3.], [0., 5.]).valid);
}

#[test]
fn plan_move() {
    let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    assert_eq!(arm.plan_move(&pose, [9., 0.]), Err(Error::OutsideWorkspace));
    assert!(arm.plan_move(&pose, [-4., -3.]).is_err());
    assert!(arm.plan_move(&pose, [3., 5.]).is_ok());
}

#[test]
fn motion_keeps_links() {
    let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    let frames = arm.motion(&pose, [-3., 5.], anim::STEPS).collect::<Vec<_>>();
    assert_eq!(frames.len(), anim::STEPS);
    for Frame { pose, .. } in &frames {
        assert!(pose.is_consistent(5., 3., 1e-9));
    }
    let last = frames.last().unwrap().pose.end_effector;
    assert_relative_eq!(last[0], -3., epsilon = 1e-9);
    assert_relative_eq!(last[1], 5., epsilon = 1e-9);
    // Same branch on the whole path
    assert!(frames
        .iter()
        .all(|f| turn_of(f.pose.elbow, f.pose.end_effector) == Direction::Clockwise));
}

#[test]
fn motion_stops_when_unreachable() {
    let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    // Goes out of the outer circle on the way
    let frames = arm.motion(&pose, [12.4, 9.3], 10).collect::<Vec<_>>();
    assert_eq!(frames.len(), 2);
    assert!(frames.last().unwrap().pose.end_effector.norm() <= 8.);
}

#[test]
fn animate_with_scheduler() {
    let arm = TwoLink::new(5., 3., Direction::CounterClockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    let mut waited = Vec::new();
    let mut scheduler = |d: Duration| waited.push(d);
    let motion = arm.motion(&pose, [3., 5.], 20);
    let report = animate(pose, motion, anim::DELAY, &mut scheduler, |_| true);
    assert!(report.finished);
    assert!(!report.cancelled);
    assert_eq!(report.frames, 20);
    assert_eq!(waited.len(), 19);
    assert_abs_diff_eq!(report.last.end_effector[0], 3., epsilon = 1e-12);
    assert_abs_diff_eq!(report.last.end_effector[1], 5., epsilon = 1e-12);
}

#[test]
fn animate_cancel() {
    let arm = TwoLink::new(5., 3., Direction::CounterClockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    let motion = arm.motion(&pose, [3., 5.], 20);
    let report = animate(pose, motion, anim::DELAY, &mut NoDelay, |f| f.step < 5);
    assert!(report.cancelled);
    assert!(!report.finished);
    assert_eq!(report.frames, 5);
    // Nothing played at all
    let motion = arm.motion(&pose, [12., 9.], 1);
    let report = animate(pose, motion, anim::DELAY, &mut NoDelay, |_| true);
    assert_eq!(report.frames, 0);
    assert_eq!(report.last, pose);
    assert!(!report.finished);
}

#[cfg(feature = "csv")]
#[test]
fn frames_csv() {
    let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
    let pose = arm.pose([4., 3.]).unwrap();
    let frames = arm.motion(&pose, [3., 5.], 4).collect::<Vec<_>>();
    let s = crate::csv::dump_frames(&frames).unwrap();
    assert!(s.starts_with("step,elbow_x,elbow_y,x,y"));
    assert_eq!(s.lines().count(), 5);
    let back = crate::csv::parse_frames(&s).unwrap();
    assert_eq!(back.len(), 4);
    assert_eq!(back[3].step, 4);
}
