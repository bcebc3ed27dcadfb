/*
 * @Description  : 训练单元配置（可从JSON加载）
 */

use crate::errors::{ComparisonOperator, TrainError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainerConfig {
    /// 代价函数名
    pub cost: String,
    /// 每多少个样本触发一次反向传播
    pub batch_size: usize,
    pub learning_rate: f32,
    /// 是否把每个样本的输出误差交给`ErrorSink`
    pub error_tracking: bool,
    /// 连续变差多少次后调整学习率
    pub error_fluctuation_limit: u32,
    /// 学习率下限；`None`表示不截断，学习率非正时报错
    pub learning_rate_floor: Option<f32>,
    /// 学习率抖动的随机种子
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            cost: "meanSquaredError".to_string(),
            batch_size: 1,
            learning_rate: 1.0,
            error_tracking: false,
            error_fluctuation_limit: 1,
            learning_rate_floor: None,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn new(cost: &str, batch_size: usize) -> Self {
        Self {
            cost: cost.to_string(),
            batch_size,
            ..Self::default()
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_error_tracking(mut self, enabled: bool) -> Self {
        self.error_tracking = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_learning_rate_floor(mut self, floor: f32) -> Self {
        self.learning_rate_floor = Some(floor);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, TrainError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TrainError::InvalidConfig(format!("JSON解析失败: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TrainError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TrainError::InvalidConfig(format!("无法读取配置文件{}: {e}", path.as_ref().display()))
        })?;
        Self::from_json_str(&json)
    }

    /// 数值范围校验（函数名的可解析性由训练单元构造时检查）
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.batch_size < 1 {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "batch_size".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1.0,
            });
        }
        if !(self.learning_rate > 0.0) || !self.learning_rate.is_finite() {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "learning_rate".to_string(),
                operator: ComparisonOperator::GreaterThan,
                threshold: 0.0,
            });
        }
        if self.error_fluctuation_limit < 1 {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "error_fluctuation_limit".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 1.0,
            });
        }
        if let Some(floor) = self.learning_rate_floor {
            if !(floor > 0.0) {
                return Err(TrainError::ValueMustSatisfyComparison {
                    value_name: "learning_rate_floor".to_string(),
                    operator: ComparisonOperator::GreaterThan,
                    threshold: 0.0,
                });
            }
        }
        Ok(())
    }
}
