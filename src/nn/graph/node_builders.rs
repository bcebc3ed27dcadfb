/*
 * @Description  : 按层配置构建全连接网络，以及权重初始化
 */

use super::{Layer, LayerFlag, LayerGraph, NodeGroup, NodeId};
use crate::distribution::Distribution;
use crate::errors::{ComparisonOperator, TrainError};
use rand::SeedableRng;
use rand::rngs::StdRng;

impl LayerGraph {
    /// 按层配置构建相邻层两两全连接的网络
    ///
    /// 第一层标记为`Input`，最后一层标记为`Output`；节点名形如"L1/N0"。
    /// 构建后所有权重均为`None`，需调用`fill_weights`或`init_weights_normal`初始化。
    pub fn from_layers(layers: &[Layer]) -> Result<Self, TrainError> {
        if layers.len() < 2 {
            return Err(TrainError::ValueMustSatisfyComparison {
                value_name: "层数".to_string(),
                operator: ComparisonOperator::GreaterOrEqual,
                threshold: 2.0,
            });
        }

        let mut graph = Self::new();
        let last = layers.len() - 1;
        let mut previous: Vec<NodeId> = Vec::new();
        for (layer_index, layer) in layers.iter().enumerate() {
            if layer.node_count == 0 {
                return Err(TrainError::MalformedGraph(format!("第{layer_index}层没有节点")));
            }
            let ids: Vec<NodeId> = (0..layer.node_count)
                .map(|i| graph.add_node(&format!("L{layer_index}/N{i}")))
                .collect();
            for &from in &previous {
                for &to in &ids {
                    graph.connect(from, to, None)?;
                }
            }

            let mut group = NodeGroup::new(ids.clone(), layer.activation.clone(), layer.bias);
            if layer_index == 0 {
                group = group.with_flag(LayerFlag::Input);
            }
            if layer_index == last {
                group = group.with_flag(LayerFlag::Output);
            }
            graph.push_group(group);
            previous = ids;
        }
        Ok(graph)
    }

    /// 所有连接统一设为同一权重
    pub fn fill_weights(&mut self, weight: f32) {
        for node in &mut self.nodes {
            for c in node.connected_to.iter_mut().chain(node.connected_by.iter_mut()) {
                c.weight = Some(weight);
            }
        }
    }

    /// 以标准正态分布初始化所有权重；`seed`为`None`时结果不可复现
    pub fn init_weights_normal(&mut self, seed: Option<u64>) -> Result<(), TrainError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let edges: Vec<(NodeId, NodeId)> = self
            .nodes
            .iter()
            .enumerate()
            .flat_map(|(index, node)| node.connected_to.iter().map(move |c| (NodeId(index), c.node)))
            .collect();
        for (from, to) in edges {
            let weight = Distribution::normal(&mut rng, 0.0, 1.0);
            self.set_weight(from, to, weight)?;
        }
        Ok(())
    }
}
