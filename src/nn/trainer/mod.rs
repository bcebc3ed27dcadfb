/*
 * @Description  : 训练单元：逐样本前向传播、误差评估、按批触发反向传播、自适应学习率
 *
 * - config.rs: TrainerConfig
 * - forward.rs: 前向传播与输出层误差
 * - backward.rs: delta规则反向传播
 * - learning_rate.rs: 自适应学习率控制器
 * - error_sink.rs: 误差日志协作者
 */

mod backward;
mod config;
mod error_sink;
mod forward;
mod learning_rate;

pub use config::TrainerConfig;
pub use error_sink::{ErrorSink, TracingErrorSink};
pub use learning_rate::LearningRateController;

use super::functions::{ActivationFn, CostFn, DerivativeFn, FunctionRegistry};
use super::graph::LayerGraph;
use crate::errors::TrainError;
use std::fmt;

/// 某一层解析后的激活函数与导数（输入层没有）
#[derive(Debug, Clone, Copy)]
pub(super) struct LayerFunctions {
    activation: ActivationFn,
    derivative: DerivativeFn,
}

/// 训练单元
///
/// 训练期间独占网络图的可变借用：节点的`value`/`weighted_sum`被当作暂存空间，
/// 不允许其他代码在一次`iterate`进行中读写该图。
///
/// ```ignore
/// let mut graph = LayerGraph::from_layers(&[Layer::new(1), Layer::new(1).activation("linear")])?;
/// graph.fill_weights(1.0);
/// let registry = FunctionRegistry::standard();
/// let mut trainer = Trainer::new(&mut graph, &registry, TrainerConfig::new("meanSquaredError", 1))?;
/// trainer.initialize_input_data(vec![1.0, 2.0]);
/// trainer.initialize_target_data(vec![1.0, 2.0]);
/// trainer.iterate()?;
/// ```
pub struct Trainer<'g> {
    graph: &'g mut LayerGraph,
    cost: CostFn,
    /// 与`graph.groups`一一对应
    layer_functions: Vec<Option<LayerFunctions>>,
    batch_size: usize,
    error_tracking: bool,
    controller: LearningRateController,
    input_data: Vec<f32>,
    target_data: Vec<f32>,
    error_sink: Box<dyn ErrorSink>,
    backward_passes: usize,
    last_backward_sample: Option<usize>,
}

impl<'g> Trainer<'g> {
    /// 校验配置与网络结构，并一次性解析所需的全部函数
    pub fn new(
        graph: &'g mut LayerGraph,
        registry: &FunctionRegistry,
        config: TrainerConfig,
    ) -> Result<Self, TrainError> {
        config.validate()?;
        graph.validate()?;

        let cost = registry.cost(&config.cost)?;
        let layer_functions = graph
            .groups()
            .iter()
            .enumerate()
            .map(|(layer_index, group)| {
                if group.is_input() {
                    return Ok(None);
                }
                let key = group.activation.as_deref().ok_or_else(|| {
                    TrainError::MalformedGraph(format!("第{layer_index}层没有指定激活函数"))
                })?;
                Ok(Some(LayerFunctions {
                    activation: registry.activation(key)?,
                    derivative: registry.derivative(key)?,
                }))
            })
            .collect::<Result<Vec<_>, TrainError>>()?;

        Ok(Self {
            graph,
            cost,
            layer_functions,
            batch_size: config.batch_size,
            error_tracking: config.error_tracking,
            controller: LearningRateController::new(
                config.learning_rate,
                config.error_fluctuation_limit,
                config.learning_rate_floor,
                config.seed,
            ),
            input_data: Vec::new(),
            target_data: Vec::new(),
            error_sink: Box::new(TracingErrorSink),
            backward_passes: 0,
            last_backward_sample: None,
        })
    }

    /// 替换误差日志协作者
    pub fn with_error_sink(mut self, sink: Box<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    // ========== 数据 ==========

    /// 替换（而非追加）输入数据
    pub fn initialize_input_data(&mut self, data: Vec<f32>) {
        self.input_data = data;
    }

    /// 替换（而非追加）目标数据
    pub fn initialize_target_data(&mut self, data: Vec<f32>) {
        self.target_data = data;
    }

    // ========== 训练 ==========

    /// 按数据顺序训练一遍（一个epoch）
    ///
    /// 每`batch_size`个样本用最近一个样本的目标值做一次反向传播；
    /// 不触发反向传播的样本结束后直接清空节点暂存值。
    pub fn iterate(&mut self) -> Result<(), TrainError> {
        if self.input_data.len() != self.target_data.len() {
            return Err(TrainError::DimensionMismatch {
                expected: self.input_data.len(),
                got: self.target_data.len(),
                message: "目标数据与输入数据的长度不一致".to_string(),
            });
        }
        // 上次失败的iterate可能留下半个样本的暂存值
        self.graph.reset_values();

        for index in 0..self.input_data.len() {
            self.forward_layers(self.input_data[index])?;
            self.evaluate_output(index)?;
            if (index + 1) % self.batch_size == 0 {
                self.backward(self.target_data[index])?;
                self.backward_passes += 1;
                self.last_backward_sample = Some(index);
            } else {
                self.graph.reset_values();
            }
        }
        Ok(())
    }

    /// 连续训练`epochs`遍
    pub fn train(&mut self, epochs: usize) -> Result<(), TrainError> {
        for epoch in 0..epochs {
            self.iterate()?;
            tracing::debug!(
                epoch = epoch + 1,
                error = self.output_error(),
                learning_rate = self.learning_rate(),
                "训练轮次完成"
            );
        }
        Ok(())
    }

    /// 只做前向传播，返回输出层各节点的值（不计算误差、不更新权重）
    pub fn predict(&mut self, input: f32) -> Result<Vec<f32>, TrainError> {
        self.graph.reset_values();
        let result = self.forward_layers(input).map(|()| self.graph.output_values());
        self.graph.reset_values();
        result
    }

    // ========== 访问 ==========

    pub fn graph(&self) -> &LayerGraph {
        &*self.graph
    }

    pub const fn learning_rate(&self) -> f32 {
        self.controller.learning_rate()
    }

    pub const fn controller(&self) -> &LearningRateController {
        &self.controller
    }

    /// 输出层最近一次记录的误差
    pub fn output_error(&self) -> f32 {
        self.graph.output_group().map_or(0.0, |g| g.error)
    }

    /// 至今执行过的反向传播次数
    pub const fn backward_passes(&self) -> usize {
        self.backward_passes
    }

    /// 最近一次触发反向传播的样本下标
    pub const fn last_backward_sample(&self) -> Option<usize> {
        self.last_backward_sample
    }
}

impl fmt::Debug for Trainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trainer")
            .field("layers", &self.layer_functions.len())
            .field("batch_size", &self.batch_size)
            .field("error_tracking", &self.error_tracking)
            .field("controller", &self.controller)
            .field("samples", &self.input_data.len())
            .field("backward_passes", &self.backward_passes)
            .finish_non_exhaustive()
    }
}
