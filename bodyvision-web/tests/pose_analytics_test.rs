//! Integration tests for the pose analytics engine
//!
//! Frames are synthetic 33-point poses built around a standing figure.

use bodyvision_web::analytics::{JointName, MovementClass, JOINT_TRIPLES};
use bodyvision_web::landmarks::*;
use bodyvision_web::{AnalyticsConfig, PoseAnalytics};

/// Upright, level figure facing the camera
fn standing_pose() -> Vec<Landmark> {
    let mut lms = vec![Landmark::new(0.5, 0.5, 0.0).with_visibility(0.99); POSE_LANDMARK_COUNT];
    lms[NOSE] = Landmark::new(0.5, 0.15, -0.3);
    lms[LEFT_SHOULDER] = Landmark::new(0.6, 0.3, 0.0);
    lms[RIGHT_SHOULDER] = Landmark::new(0.4, 0.3, 0.0);
    lms[LEFT_ELBOW] = Landmark::new(0.62, 0.45, 0.0);
    lms[RIGHT_ELBOW] = Landmark::new(0.38, 0.45, 0.0);
    lms[LEFT_WRIST] = Landmark::new(0.63, 0.58, 0.0);
    lms[RIGHT_WRIST] = Landmark::new(0.37, 0.58, 0.0);
    lms[LEFT_HIP] = Landmark::new(0.57, 0.6, 0.0);
    lms[RIGHT_HIP] = Landmark::new(0.43, 0.6, 0.0);
    lms[LEFT_KNEE] = Landmark::new(0.57, 0.75, 0.0);
    lms[RIGHT_KNEE] = Landmark::new(0.43, 0.75, 0.0);
    lms[LEFT_ANKLE] = Landmark::new(0.57, 0.9, 0.0);
    lms[RIGHT_ANKLE] = Landmark::new(0.43, 0.9, 0.0);
    lms
}

fn translated(lms: &[Landmark], dx: f32) -> Vec<Landmark> {
    lms.iter().map(|p| Landmark { x: p.x + dx, ..*p }).collect()
}

/// Deterministic xorshift for randomized poses
struct Rng(u64);

impl Rng {
    fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }
}

#[test]
fn test_short_inputs_yield_none() {
    let mut engine = PoseAnalytics::new();
    let full = standing_pose();
    for len in 0..POSE_LANDMARK_COUNT {
        assert!(engine.analyze(&full[..len]).is_none(), "len = {len}");
    }
    assert!(engine.is_empty());
}

#[test]
fn test_standing_pose_scores_full_marks() {
    let mut engine = PoseAnalytics::new();
    let snapshot = engine.analyze(&standing_pose()).unwrap();

    assert!(snapshot.joint_angles.torso_lean.abs() < 1e-3);
    assert_eq!(snapshot.body_alignment.shoulder_tilt, 0.0);
    assert_eq!(snapshot.body_alignment.hip_tilt, 0.0);
    assert_eq!(snapshot.body_alignment.symmetry_score, 100.0);
    assert_eq!(snapshot.posture_score, 100.0);
    assert!((snapshot.joint_angles.left_knee - 180.0).abs() < 0.01);
    assert!((snapshot.joint_angles.right_knee - 180.0).abs() < 0.01);
    let spine = (0.45f32.powi(2) + 0.09).sqrt();
    assert!((snapshot.body_alignment.spinal_alignment - spine).abs() < 1e-5);
}

#[test]
fn test_elbow_uses_shoulder_elbow_wrist() {
    let mut lms = standing_pose();
    lms[LEFT_SHOULDER] = Landmark::new(0.6, 0.3, 0.0);
    lms[LEFT_ELBOW] = Landmark::new(0.6, 0.45, 0.0);
    lms[LEFT_WRIST] = Landmark::new(0.75, 0.45, 0.0);

    let snapshot = PoseAnalytics::new().analyze(&lms).unwrap();
    assert!((snapshot.joint_angles.get(JointName::LeftElbow) - 90.0).abs() < 0.01);

    let (_, a, b, c) = JOINT_TRIPLES
        .iter()
        .find(|(j, ..)| *j == JointName::LeftElbow)
        .copied()
        .unwrap();
    assert_eq!((a, b, c), (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST));
}

#[test]
fn test_shoulder_reads_upper_arm_heading() {
    let snapshot = PoseAnalytics::new().analyze(&standing_pose()).unwrap();
    assert!((snapshot.joint_angles.left_shoulder - 82.405).abs() < 0.01);
    assert!((snapshot.joint_angles.right_shoulder - 97.595).abs() < 0.01);

    let shoulders: Vec<_> = JOINT_TRIPLES
        .iter()
        .filter(|(j, ..)| matches!(j, JointName::LeftShoulder | JointName::RightShoulder))
        .map(|&(_, a, b, c)| (a, b, c))
        .collect();
    assert_eq!(
        shoulders,
        vec![
            (LEFT_SHOULDER, LEFT_SHOULDER, LEFT_ELBOW),
            (RIGHT_SHOULDER, RIGHT_SHOULDER, RIGHT_ELBOW),
        ]
    );
}

#[test]
fn test_tilted_shoulders_cost_points() {
    let mut lms = standing_pose();
    lms[LEFT_SHOULDER].y = 0.26;
    lms[RIGHT_SHOULDER].y = 0.34;

    let snapshot = PoseAnalytics::new().analyze(&lms).unwrap();
    // Tilt 0.08: symmetry 92 keeps the bonus. 100 - 4 + 5 = 101, clamped
    assert!((snapshot.body_alignment.shoulder_tilt - 0.08).abs() < 1e-5);
    assert!((snapshot.body_alignment.symmetry_score - 92.0).abs() < 1e-3);
    assert_eq!(snapshot.posture_score, 100.0);

    lms[LEFT_HIP].y = 0.56;
    lms[RIGHT_HIP].y = 0.64;
    // Now 100 - 4 - 4 with symmetry 84: no bonus
    let snapshot = PoseAnalytics::new().analyze(&lms).unwrap();
    assert!((snapshot.posture_score - 92.0).abs() < 1e-3);
}

#[test]
fn test_leaning_torso_cost_points() {
    let mut lms = standing_pose();
    // Shoulders 0.3 above hips; shifting them 0.3 sideways leans 45°
    for i in [NOSE, LEFT_SHOULDER, RIGHT_SHOULDER] {
        lms[i].x += 0.3;
    }
    let snapshot = PoseAnalytics::new().analyze(&lms).unwrap();
    assert!((snapshot.joint_angles.torso_lean - 45.0).abs() < 0.01);
    // 100 - 35 * 2 + 5
    assert!((snapshot.posture_score - 35.0).abs() < 0.05);
}

#[test]
fn test_posture_score_stays_in_range() {
    let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
    let mut engine = PoseAnalytics::new();

    for _ in 0..500 {
        let lms: Vec<Landmark> = (0..POSE_LANDMARK_COUNT)
            .map(|_| {
                // Include points well outside the frame for extreme tilts
                let x = rng.next_f32() * 3.0 - 1.0;
                let y = rng.next_f32() * 3.0 - 1.0;
                let z = rng.next_f32() - 0.5;
                Landmark::new(x, y, z)
            })
            .collect();
        let score = engine.analyze(&lms).unwrap().posture_score;
        assert!((0.0..=100.0).contains(&score), "score {score}");
    }
}

#[test]
fn test_identical_frames_are_static() {
    let mut engine = PoseAnalytics::new();
    let pose = standing_pose();
    engine.analyze(&pose).unwrap();
    let second = engine.analyze(&pose).unwrap();
    assert_eq!(second.movement.classification, MovementClass::Static);
    assert_eq!(second.movement.speed, 0.0);

    let third = engine.analyze(&pose).unwrap();
    assert_eq!(third.movement.classification, MovementClass::Static);
    assert_eq!(third.movement.speed, 0.0);
}

#[test]
fn test_movement_classes_across_frames() {
    let mut engine = PoseAnalytics::new();
    let pose = standing_pose();
    engine.analyze(&pose).unwrap();
    engine.analyze(&pose).unwrap();

    let slow = engine.analyze(&translated(&pose, 0.01)).unwrap();
    assert_eq!(slow.movement.classification, MovementClass::Slow);

    // Each frame is compared with the one right before it
    let moderate = engine.analyze(&translated(&pose, 0.04)).unwrap();
    assert_eq!(moderate.movement.classification, MovementClass::Moderate);
    assert!((moderate.movement.speed - 0.03).abs() < 1e-5);
    assert!((moderate.movement.velocity - 1.8).abs() < 1e-3);

    let fast = engine.analyze(&translated(&pose, 0.14)).unwrap();
    assert_eq!(fast.movement.classification, MovementClass::Fast);
}

#[test]
fn test_custom_thresholds() {
    let mut config = AnalyticsConfig::default();
    config.movement.slow = 0.02;
    config.movement.moderate = 0.1;
    config.movement.fast = 0.2;
    let mut engine = PoseAnalytics::with_config(config);
    let pose = standing_pose();
    engine.analyze(&pose).unwrap();
    engine.analyze(&pose).unwrap();

    let snapshot = engine.analyze(&translated(&pose, 0.01)).unwrap();
    assert_eq!(snapshot.movement.classification, MovementClass::Static);
}

#[test]
fn test_history_keeps_most_recent_in_order() {
    let mut engine = PoseAnalytics::new();
    for t in 0..250 {
        engine.analyze_at(&standing_pose(), t as f64).unwrap();
    }
    assert_eq!(engine.len(), 100);
    let stamps: Vec<f64> = engine.history().map(|s| s.timestamp).collect();
    let expected: Vec<f64> = (150..250).map(|t| t as f64).collect();
    assert_eq!(stamps, expected);
}

#[test]
fn test_trends_average_available_samples() {
    let mut engine = PoseAnalytics::new();
    let mut leaning = standing_pose();
    for i in [LEFT_SHOULDER, RIGHT_SHOULDER] {
        leaning[i].x += 0.3;
    }

    engine.analyze(&standing_pose()).unwrap();
    engine.analyze(&standing_pose()).unwrap();
    engine.analyze(&leaning).unwrap();

    let trends = engine.trends(5).unwrap();
    assert_eq!(trends.sample_count, 3);
    assert!((trends.average_torso_lean - 15.0).abs() < 0.01);
    assert!((trends.average_posture_score - (100.0 + 100.0 + 35.0) / 3.0).abs() < 0.05);

    let last_only = engine.trends(1).unwrap();
    assert_eq!(last_only.sample_count, 1);
    assert!((last_only.average_torso_lean - 45.0).abs() < 0.01);
}

#[test]
fn test_report_payload() {
    let snapshot = PoseAnalytics::new().analyze(&standing_pose()).unwrap();
    let payload = snapshot.report().to_json().unwrap();
    let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(json["postureScore"], 100.0);
    assert!(json["jointAngles"]["torsoLean"].is_number());
    assert!(json["bodyAlignment"]["spinalAlignment"].is_number());
    assert!(json.get("movement").is_none());
}
