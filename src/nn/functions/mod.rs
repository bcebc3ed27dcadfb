/*
 * @Description  : 激活/导数/代价函数目录
 *
 * 训练单元在构造时一次性按名称解析所需函数，之后只持有函数指针。
 */

mod activation;
mod cost;

pub use activation::{
    leaky_relu, leaky_relu_derivative, linear, linear_derivative, relu, relu_derivative, sigmoid,
    sigmoid_derivative, tanh, tanh_derivative,
};
pub use cost::{binary_cross_entropy, mean_absolute_error, mean_squared_error};

use crate::errors::{FunctionKind, TrainError};
use std::collections::HashMap;

pub type ActivationFn = fn(f32) -> f32;
/// 激活函数在激活前累加和处的导数
pub type DerivativeFn = fn(f32) -> f32;
/// `(target, output) -> error`
pub type CostFn = fn(f32, f32) -> f32;

#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    activations: HashMap<String, ActivationFn>,
    derivatives: HashMap<String, DerivativeFn>,
    costs: HashMap<String, CostFn>,
}

impl FunctionRegistry {
    /// 空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置目录
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register_activation("linear", linear, linear_derivative)
            .register_activation("sigmoid", sigmoid, sigmoid_derivative)
            .register_activation("tanh", tanh, tanh_derivative)
            .register_activation("relu", relu, relu_derivative)
            .register_activation("leakyRelu", leaky_relu, leaky_relu_derivative)
            .register_cost("meanSquaredError", mean_squared_error)
            .register_cost("meanAbsoluteError", mean_absolute_error)
            .register_cost("binaryCrossEntropy", binary_cross_entropy);
        registry
    }

    /// 注册（或覆盖）一个激活函数及其导数
    pub fn register_activation(
        &mut self,
        key: &str,
        activation: ActivationFn,
        derivative: DerivativeFn,
    ) -> &mut Self {
        self.activations.insert(key.to_string(), activation);
        self.derivatives.insert(key.to_string(), derivative);
        self
    }

    pub fn register_cost(&mut self, key: &str, cost: CostFn) -> &mut Self {
        self.costs.insert(key.to_string(), cost);
        self
    }

    pub fn activation(&self, key: &str) -> Result<ActivationFn, TrainError> {
        Self::lookup(&self.activations, FunctionKind::Activation, key)
    }

    pub fn derivative(&self, key: &str) -> Result<DerivativeFn, TrainError> {
        Self::lookup(&self.derivatives, FunctionKind::Derivative, key)
    }

    pub fn cost(&self, key: &str) -> Result<CostFn, TrainError> {
        Self::lookup(&self.costs, FunctionKind::Cost, key)
    }

    fn lookup<F: Copy>(
        catalog: &HashMap<String, F>,
        kind: FunctionKind,
        key: &str,
    ) -> Result<F, TrainError> {
        catalog.get(key).copied().ok_or_else(|| TrainError::UnknownFunction {
            kind,
            key: key.to_string(),
        })
    }
}
