/*
 * @Description  : 训练用到的随机数：学习率抖动与权重初始化
 */

use crate::errors::{ComparisonOperator, TrainError};
use rand::Rng;

#[cfg(test)]
mod tests;

pub struct Distribution;

impl Distribution {
    /// 在`[low, high)`内均匀取一个随机数；若给定`precision`，则对齐到该小数位数
    ///
    /// 对齐后的结果仍落在`[low, high)`内：四舍五入越过上限时退一格，低于下限时进一格。
    /// 区间内没有任何该精度的取值时返回错误。
    pub fn uniform_range<R: Rng + ?Sized>(
        rng: &mut R,
        low: f32,
        high: f32,
        precision: Option<u32>,
    ) -> Result<f32, TrainError> {
        if !(high > low) {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "随机区间上限".to_string(),
                operator: ComparisonOperator::GreaterThan,
                threshold: low,
            });
        }
        let value = rng.gen_range(low..high);
        let Some(digits) = precision else {
            return Ok(value);
        };
        let factor = 10f64.powi(digits as i32);
        let snap = |units: f64| (units / factor) as f32;
        let mut units = (f64::from(value) * factor).round();
        if snap(units) >= high {
            units -= 1.0;
        } else if snap(units) < low {
            units += 1.0;
        }
        let snapped = snap(units);
        if snapped < low || snapped >= high {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "随机区间宽度".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: snap(1.0),
            });
        }
        Ok(snapped)
    }

    /// Box-Muller变换得到的正态分布样本
    pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
        // u1不能为0，否则ln发散
        let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
        let u2: f32 = rng.gen_range(0.0..1.0);
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
        mean + std_dev * z0
    }
}
