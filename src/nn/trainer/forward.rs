/*
 * @Description  : 前向传播与输出层误差评估
 */

use super::Trainer;
use crate::errors::TrainError;
use crate::nn::graph::{Node, NodeId};

impl Trainer<'_> {
    /// 按层的前向顺序处理一个样本
    ///
    /// 进入时所有节点的`value`必须为0。输入层只给第一个节点赋值；
    /// 其余层先记下累加和，再加偏置、过激活函数，最后把值按权重累加到下游节点。
    pub(super) fn forward_layers(&mut self, input: f32) -> Result<(), TrainError> {
        let graph = &mut *self.graph;
        for (layer_index, group) in graph.groups.iter().enumerate() {
            if group.is_input() {
                graph.nodes[group.nodes[0].0].value = input;
            }
            for &id in &group.nodes {
                if let Some(functions) = self.layer_functions[layer_index] {
                    let node = &mut graph.nodes[id.0];
                    node.weighted_sum = node.value;
                    node.value = TrainError::check_finite(
                        (functions.activation)(node.value + group.bias),
                        "激活函数",
                    )?;
                }

                let value = graph.nodes[id.0].value;
                for k in 0..graph.nodes[id.0].connected_to.len() {
                    let (downstream, weight) = concrete_weight(&graph.nodes, id, k)?;
                    graph.nodes[downstream.0].value += weight * value;
                }
            }
        }
        Ok(())
    }

    /// 对输出层每个节点计算代价；覆盖旧误差前先用新旧误差驱动学习率调整
    pub(super) fn evaluate_output(&mut self, sample_index: usize) -> Result<(), TrainError> {
        let target = self.target_data[sample_index];
        let output_layer = self.graph.groups.len() - 1;
        for k in 0..self.graph.groups[output_layer].nodes.len() {
            let id = self.graph.groups[output_layer].nodes[k];
            let output = self.graph.nodes[id.0].value;
            let error = TrainError::check_finite((self.cost)(target, output), "代价函数")?;

            let old_error = self.graph.groups[output_layer].error;
            self.controller.adapt(old_error, error)?;
            self.graph.groups[output_layer].error = error;

            if self.error_tracking {
                self.error_sink.record(sample_index, error);
            }
        }
        Ok(())
    }
}

/// 读取节点`from`第`k`条下游连接的目标节点与权重
fn concrete_weight(
    nodes: &[Node],
    from: NodeId,
    k: usize,
) -> Result<(NodeId, f32), TrainError> {
    let c = &nodes[from.0].connected_to[k];
    c.weight.map(|w| (c.node, w)).ok_or_else(|| TrainError::UninitializedWeight {
        from: nodes[from.0].name().to_string(),
        to: nodes[c.node.0].name().to_string(),
    })
}
