/*
 * @Description  : 按相邻样本误差的走势随机微调学习率
 */

use crate::distribution::Distribution;
use crate::errors::TrainError;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 每次调整的抖动区间`[JITTER_LOW, JITTER_HIGH)`，保留4位小数
const JITTER_LOW: f32 = 0.0001;
const JITTER_HIGH: f32 = 0.0009;
const JITTER_PRECISION: u32 = 4;

/// 自适应学习率控制器
///
/// 误差连续变差达到`error_fluctuation_limit`次时翻转方向：
/// 当前不处于"增大"模式则加上一个随机抖动并进入"增大"模式，
/// 否则减去一个新抽取的抖动并回到"减小"模式。误差持平或变好时清零计数。
#[derive(Debug, Clone)]
pub struct LearningRateController {
    learning_rate: f32,
    error_correction_increase: bool,
    error_fluctuation_limit: u32,
    error_counter: u32,
    non_error: u32,
    floor: Option<f32>,
    rng: StdRng,
}

impl LearningRateController {
    pub fn new(
        learning_rate: f32,
        error_fluctuation_limit: u32,
        floor: Option<f32>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            learning_rate,
            error_correction_increase: false,
            error_fluctuation_limit,
            error_counter: 0,
            non_error: 0,
            floor,
            rng,
        }
    }

    pub const fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub const fn is_increasing(&self) -> bool {
        self.error_correction_increase
    }

    pub const fn error_counter(&self) -> u32 {
        self.error_counter
    }

    pub const fn non_error(&self) -> u32 {
        self.non_error
    }

    /// 根据旧误差与新误差更新状态，必要时调整学习率
    pub fn adapt(&mut self, old_error: f32, new_error: f32) -> Result<(), TrainError> {
        if new_error > old_error {
            self.error_counter += 1;
            self.non_error = 0;
            if self.error_counter >= self.error_fluctuation_limit {
                self.error_counter = 0;
                self.toggle()?;
            }
        } else {
            self.error_counter = 0;
            self.non_error += 1;
        }
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), TrainError> {
        let jitter = Distribution::uniform_range(
            &mut self.rng,
            JITTER_LOW,
            JITTER_HIGH,
            Some(JITTER_PRECISION),
        )?;
        let before = self.learning_rate;
        if self.error_correction_increase {
            self.learning_rate -= jitter;
            self.error_correction_increase = false;
        } else {
            self.learning_rate += jitter;
            self.error_correction_increase = true;
        }
        tracing::debug!(
            "学习率调整: {before} -> {}（{}）",
            self.learning_rate,
            if self.error_correction_increase { "增大" } else { "减小" }
        );
        self.enforce_floor()
    }

    fn enforce_floor(&mut self) -> Result<(), TrainError> {
        match self.floor {
            Some(floor) if self.learning_rate < floor || !self.learning_rate.is_finite() => {
                tracing::warn!("学习率{}越过下限，截断为{floor}", self.learning_rate);
                self.learning_rate = floor;
                Ok(())
            }
            None if !(self.learning_rate > 0.0) || !self.learning_rate.is_finite() => {
                Err(TrainError::NumericInstability(format!(
                    "学习率漂移到{}，可设置learning_rate_floor以截断",
                    self.learning_rate
                )))
            }
            _ => Ok(()),
        }
    }
}
