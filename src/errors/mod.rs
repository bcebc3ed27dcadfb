use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq)]
pub enum TrainError {
    // 数字比较用
    #[error("{value_name}须{operator}{threshold}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: f32,
    },
    // 函数目录
    #[error("未知的{kind}函数：`{key}`")]
    UnknownFunction { kind: FunctionKind, key: String },

    // 网络结构
    #[error("网络结构不合法：{0}")]
    MalformedGraph(String),
    #[error("连接{from}→{to}的权重尚未初始化")]
    UninitializedWeight { from: String, to: String },

    #[error("配置无效：{0}")]
    InvalidConfig(String),

    #[error("{message}：预期{expected}，实际为{got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },

    #[error("数值不稳定：{0}")]
    NumericInstability(String),
}

impl TrainError {
    /// 若`value`非有限值，则返回`NumericInstability`错误
    pub(crate) fn check_finite(value: f32, what: &str) -> Result<f32, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NumericInstability(format!("{what}的结果为{value}")))
        }
    }
}
