use super::Distribution;
use approx::assert_abs_diff_eq;
use crate::assert_err;
use crate::errors::TrainError;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_uniform_range_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let value = Distribution::uniform_range(&mut rng, 0.0001, 0.0009, None).unwrap();
        assert!((0.0001..0.0009).contains(&value), "越界：{value}");
    }
}

#[test]
fn test_uniform_range_with_precision() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let value = Distribution::uniform_range(&mut rng, 0.0001, 0.0009, Some(4)).unwrap();
        // 4位小数：乘以1e4后应为整数
        let scaled = f64::from(value) * 1e4;
        assert!((scaled - scaled.round()).abs() < 1e-3, "{value}不是4位小数");
        assert!((0.0001..0.0009).contains(&value), "越界：{value}");
    }
}

#[test]
fn test_uniform_range_with_precision_never_reaches_high() {
    // 靠近上限的取值四舍五入后会等于上限，须退回到区间内
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let value = Distribution::uniform_range(&mut rng, 0.00075, 0.0009, Some(4)).unwrap();
        assert_abs_diff_eq!(value, 0.0008, epsilon = 1e-9);
    }
}

#[test]
fn test_uniform_range_without_value_at_precision() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_err!(
        Distribution::uniform_range(&mut rng, 0.00011, 0.00012, Some(4)),
        TrainError::ValueMustSatisfyComparison { value_name, .. } if value_name == "随机区间宽度"
    );
}

#[test]
fn test_uniform_range_is_reproducible_with_seed() {
    let mut rng1 = StdRng::seed_from_u64(3);
    let mut rng2 = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        assert_eq!(
            Distribution::uniform_range(&mut rng1, -1.0, 1.0, Some(2)).unwrap(),
            Distribution::uniform_range(&mut rng2, -1.0, 1.0, Some(2)).unwrap()
        );
    }
}

#[test]
fn test_uniform_range_rejects_empty_interval() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_err!(
        Distribution::uniform_range(&mut rng, 1.0, 1.0, None),
        TrainError::ValueMustSatisfyComparison { .. }
    );
}

#[test]
fn test_normal_sample_statistics() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 20_000;
    let samples: Vec<f32> = (0..n)
        .map(|_| Distribution::normal(&mut rng, 1.0, 2.0))
        .collect();
    let mean = samples.iter().sum::<f32>() / n as f32;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n as f32;
    assert!((mean - 1.0).abs() < 0.1, "均值偏差过大：{mean}");
    assert!((var.sqrt() - 2.0).abs() < 0.1, "标准差偏差过大：{}", var.sqrt());
}
