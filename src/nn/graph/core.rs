/*
 * @Description  : LayerGraph 基础操作：节点/层的存取、双向连接、结构校验
 */

use super::{Connection, Node, NodeGroup, NodeId};
use crate::errors::TrainError;

/// 分层网络图
///
/// 所有节点存放在一个数组中，层（`NodeGroup`）按前向顺序引用其中的节点。
/// 连接只允许从靠前的层指向靠后的层。
#[derive(Debug, Clone, Default)]
pub struct LayerGraph {
    pub(in crate::nn) nodes: Vec<Node>,
    pub(in crate::nn) groups: Vec<NodeGroup>,
}

impl LayerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 构建 ==========

    pub fn add_node(&mut self, name: &str) -> NodeId {
        self.nodes.push(Node::new(name));
        NodeId(self.nodes.len() - 1)
    }

    /// 追加一层（位于当前最后一层之后）
    pub fn push_group(&mut self, group: NodeGroup) {
        self.groups.push(group);
    }

    /// 连接`from`→`to`，同时写入两端的记录
    pub fn connect(&mut self, from: NodeId, to: NodeId, weight: Option<f32>) -> Result<(), TrainError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.nodes[from.0].connected_to.push(Connection::new(to, weight));
        self.nodes[to.0].connected_by.push(Connection::new(from, weight));
        Ok(())
    }

    // ========== 访问 ==========

    pub fn node(&self, id: NodeId) -> Result<&Node, TrainError> {
        self.nodes.get(id.0).ok_or_else(|| Self::missing_node(id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn groups(&self) -> &[NodeGroup] {
        &self.groups
    }

    pub fn input_group(&self) -> Option<&NodeGroup> {
        self.groups.iter().find(|g| g.is_input())
    }

    pub fn output_group(&self) -> Option<&NodeGroup> {
        self.groups.iter().find(|g| g.is_output())
    }

    /// 输出层各节点当前的值
    pub fn output_values(&self) -> Vec<f32> {
        self.output_group()
            .map(|g| g.nodes.iter().map(|id| self.nodes[id.0].value).collect())
            .unwrap_or_default()
    }

    /// 从上游视角读取`from`→`to`的权重
    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<Option<f32>, TrainError> {
        self.node(from)?
            .connected_to
            .iter()
            .find(|c| c.node == to)
            .map(|c| c.weight)
            .ok_or_else(|| Self::missing_edge(&self.nodes[from.0], to))
    }

    /// 设置`from`→`to`的权重，两端同步更新
    pub fn set_weight(&mut self, from: NodeId, to: NodeId, weight: f32) -> Result<(), TrainError> {
        self.check_node(from)?;
        self.check_node(to)?;
        let position = self.nodes[from.0]
            .connected_to
            .iter()
            .position(|c| c.node == to)
            .ok_or_else(|| Self::missing_edge(&self.nodes[from.0], to))?;
        self.nodes[from.0].connected_to[position].weight = Some(weight);
        self.sync_mirror(from, to, weight)
    }

    /// 把上游节点`upstream`对下游节点`downstream`的镜像连接权重改为`weight`
    fn sync_mirror(
        &mut self,
        upstream: NodeId,
        downstream: NodeId,
        weight: f32,
    ) -> Result<(), TrainError> {
        let position = self.nodes[downstream.0]
            .connected_by
            .iter()
            .position(|c| c.node == upstream)
            .ok_or_else(|| {
                TrainError::MalformedGraph(format!(
                    "{}缺少来自{}的镜像连接",
                    self.nodes[downstream.0], self.nodes[upstream.0]
                ))
            })?;
        self.nodes[downstream.0].connected_by[position].weight = Some(weight);
        Ok(())
    }

    /// 将所有节点的暂存值归零
    pub fn reset_values(&mut self) {
        for node in &mut self.nodes {
            node.value = 0.0;
            node.weighted_sum = 0.0;
        }
    }

    /// 检查每条边两端记录的权重是否一致
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().enumerate().all(|(index, node)| {
            node.connected_to.iter().all(|c| {
                self.nodes.get(c.node.0).is_some_and(|downstream| {
                    downstream
                        .connected_by
                        .iter()
                        .any(|m| m.node == NodeId(index) && m.weight == c.weight)
                })
            }) && node.connected_by.iter().all(|c| {
                self.nodes.get(c.node.0).is_some_and(|upstream| {
                    upstream
                        .connected_to
                        .iter()
                        .any(|m| m.node == NodeId(index) && m.weight == c.weight)
                })
            })
        })
    }

    // ========== 校验 ==========

    /// 训练前的结构校验
    ///
    /// - 至少两层且每层非空
    /// - 恰有一层带`Input`且为第一层，恰有一层带`Output`且为最后一层
    /// - 所有连接权重均已初始化，且两端镜像一致
    /// - 连接只从靠前的层指向靠后的层
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.groups.len() < 2 {
            return Err(TrainError::MalformedGraph(format!(
                "至少需要输入层和输出层，当前只有{}层",
                self.groups.len()
            )));
        }
        let input_count = self.groups.iter().filter(|g| g.is_input()).count();
        let output_count = self.groups.iter().filter(|g| g.is_output()).count();
        if input_count != 1 || !self.groups[0].is_input() {
            return Err(TrainError::MalformedGraph(format!(
                "须恰有一个输入层且位于第一层，当前有{input_count}个"
            )));
        }
        if output_count != 1 || !self.groups[self.groups.len() - 1].is_output() {
            return Err(TrainError::MalformedGraph(format!(
                "须恰有一个输出层且位于最后一层，当前有{output_count}个"
            )));
        }

        let mut layer_of = vec![None; self.nodes.len()];
        for (layer_index, group) in self.groups.iter().enumerate() {
            if group.nodes.is_empty() {
                return Err(TrainError::MalformedGraph(format!("第{layer_index}层没有节点")));
            }
            for &id in &group.nodes {
                self.check_node(id)?;
                if layer_of[id.0].replace(layer_index).is_some() {
                    return Err(TrainError::MalformedGraph(format!(
                        "{}同时属于多个层",
                        self.nodes[id.0]
                    )));
                }
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            for c in &node.connected_to {
                let downstream = self.node(c.node)?;
                if c.weight.is_none() {
                    return Err(TrainError::UninitializedWeight {
                        from: node.name().to_string(),
                        to: downstream.name().to_string(),
                    });
                }
                match (layer_of[index], layer_of[c.node.0]) {
                    (Some(from), Some(to)) if from < to => {}
                    _ => {
                        return Err(TrainError::MalformedGraph(format!(
                            "{node}→{downstream}不是从前层指向后层的连接"
                        )));
                    }
                }
            }
            for c in &node.connected_by {
                if c.weight.is_none() {
                    return Err(TrainError::UninitializedWeight {
                        from: self.node(c.node)?.name().to_string(),
                        to: node.name().to_string(),
                    });
                }
            }
        }

        if !self.is_symmetric() {
            return Err(TrainError::MalformedGraph(
                "存在两端权重不一致或缺少镜像的连接".to_string(),
            ));
        }
        Ok(())
    }

    fn check_node(&self, id: NodeId) -> Result<(), TrainError> {
        self.node(id).map(|_| ())
    }

    fn missing_node(id: NodeId) -> TrainError {
        TrainError::MalformedGraph(format!("节点{id}不存在"))
    }

    fn missing_edge(from: &Node, to: NodeId) -> TrainError {
        TrainError::MalformedGraph(format!("{from}没有指向节点{to}的连接"))
    }
}
