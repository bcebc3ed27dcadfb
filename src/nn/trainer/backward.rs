/*
 * @Description  : delta规则反向传播
 */

use super::Trainer;
use crate::errors::TrainError;
use crate::nn::delta_rule::delta_rule;

impl Trainer<'_> {
    /// 以`target`为目标，按层的逆序更新所有上游连接的权重
    ///
    /// 每层只用本层节点自身的累加和求导，不做链式法则的误差累加。
    /// 上游节点的值在其所在层被处理前保持不变，因此逆序遍历时仍可读取。
    /// 每个节点处理完后其暂存值归零。
    pub(super) fn backward(&mut self, target: f32) -> Result<(), TrainError> {
        let learning_rate = self.controller.learning_rate();
        for layer_index in (0..self.graph.groups.len()).rev() {
            let derivative = self.layer_functions[layer_index].map(|f| f.derivative);
            for k in 0..self.graph.groups[layer_index].nodes.len() {
                let id = self.graph.groups[layer_index].nodes[k];
                if let Some(derivative) = derivative {
                    let node = &self.graph.nodes[id.0];
                    let output = node.value;
                    let local = TrainError::check_finite(derivative(node.weighted_sum), "导数")?;

                    for e in 0..self.graph.nodes[id.0].connected_by.len() {
                        let upstream = self.graph.nodes[id.0].connected_by[e].node;
                        let weight = self.graph.nodes[id.0].connected_by[e].weight.ok_or_else(|| {
                            TrainError::UninitializedWeight {
                                from: self.graph.nodes[upstream.0].name().to_string(),
                                to: self.graph.nodes[id.0].name().to_string(),
                            }
                        })?;
                        let upstream_value = self.graph.nodes[upstream.0].value;
                        let delta = delta_rule(target, output, local, upstream_value, learning_rate);
                        let updated = TrainError::check_finite(weight - delta, "权重更新")?;
                        self.graph.set_weight(upstream, id, updated)?;
                    }
                }
                self.graph.nodes[id.0].value = 0.0;
            }
        }
        tracing::debug!(target_value = target, learning_rate, "反向传播完成");
        Ok(())
    }
}
