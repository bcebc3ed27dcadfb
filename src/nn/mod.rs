/*
 * @Description  : 分层前馈网络：网络图、函数目录、delta规则与训练单元
 */

pub mod delta_rule;
pub mod functions;
mod graph;
mod trainer;

pub use delta_rule::delta_rule;
pub use functions::{ActivationFn, CostFn, DerivativeFn, FunctionRegistry};
pub use graph::{Connection, Layer, LayerFlag, LayerGraph, Node, NodeGroup, NodeId};
pub use trainer::{ErrorSink, LearningRateController, TracingErrorSink, Trainer, TrainerConfig};

#[cfg(test)]
mod tests;
