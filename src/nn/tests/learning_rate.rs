/*
 * @Description  : 自适应学习率控制器的测试
 */

use crate::assert_err;
use crate::errors::TrainError;
use crate::nn::LearningRateController;

#[test]
fn test_first_worsening_increases_learning_rate() {
    let mut controller = LearningRateController::new(1.0, 1, None, Some(42));
    controller.adapt(0.0, 1.0).unwrap();

    let lr = controller.learning_rate();
    assert!((1.0001 - 1e-6..=1.0009 + 1e-6).contains(&lr), "学习率{lr}不在抖动区间内");
    assert!(controller.is_increasing());
    assert_eq!(controller.non_error(), 0);
}

#[test]
fn test_sustained_worsening_alternates_direction() {
    let mut controller = LearningRateController::new(0.5, 1, None, Some(3));
    let mut previous = controller.learning_rate();
    for step in 0..8 {
        controller.adapt(step as f32, step as f32 + 1.0).unwrap();
        let current = controller.learning_rate();
        if step % 2 == 0 {
            assert!(current > previous, "第{step}步应增大：{previous} -> {current}");
            assert!(controller.is_increasing());
        } else {
            assert!(current < previous, "第{step}步应减小：{previous} -> {current}");
            assert!(!controller.is_increasing());
        }
        assert!((current - previous).abs() <= 0.0009 + 1e-6);
        previous = current;
    }
}

#[test]
fn test_improvement_or_steady_error_keeps_learning_rate() {
    let mut controller = LearningRateController::new(0.3, 1, None, Some(0));
    controller.adapt(2.0, 1.0).unwrap();
    controller.adapt(1.0, 1.0).unwrap();
    assert_eq!(controller.learning_rate(), 0.3);
    assert_eq!(controller.error_counter(), 0);
    assert_eq!(controller.non_error(), 2);
}

#[test]
fn test_fluctuation_limit_counts_consecutive_worsening() {
    let mut controller = LearningRateController::new(0.3, 3, None, Some(0));
    controller.adapt(0.0, 1.0).unwrap();
    controller.adapt(1.0, 2.0).unwrap();
    assert_eq!(controller.error_counter(), 2);
    assert_eq!(controller.learning_rate(), 0.3);

    // 中途变好会清零计数
    controller.adapt(2.0, 1.5).unwrap();
    assert_eq!(controller.error_counter(), 0);
    controller.adapt(1.5, 2.0).unwrap();
    controller.adapt(2.0, 2.5).unwrap();
    assert_eq!(controller.learning_rate(), 0.3);

    controller.adapt(2.5, 3.0).unwrap();
    assert!(controller.learning_rate() > 0.3);
    assert_eq!(controller.error_counter(), 0);
}

#[test]
fn test_non_positive_learning_rate_without_floor_fails() {
    // 控制器本身不校验初值：从负学习率出发，第一次调整后仍为负
    let mut controller = LearningRateController::new(-1.0, 1, None, Some(0));
    assert_err!(
        controller.adapt(0.0, 1.0),
        TrainError::NumericInstability(msg) if msg.contains("学习率")
    );
}

#[test]
fn test_floor_clamps_learning_rate() {
    let floor = 0.0005;
    let mut controller = LearningRateController::new(floor, 1, Some(floor), Some(9));
    for step in 0..1000 {
        controller.adapt(step as f32, step as f32 + 1.0).unwrap();
        assert!(controller.learning_rate() >= floor);
    }
}

#[test]
fn test_same_seed_same_adjustments() {
    let mut c1 = LearningRateController::new(1.0, 1, None, Some(11));
    let mut c2 = LearningRateController::new(1.0, 1, None, Some(11));
    for step in 0..5 {
        c1.adapt(step as f32, step as f32 + 1.0).unwrap();
        c2.adapt(step as f32, step as f32 + 1.0).unwrap();
        assert_eq!(c1.learning_rate(), c2.learning_rate());
    }
}
