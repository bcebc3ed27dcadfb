/*
 * @Description  : 节点、节点索引与连接
 */

use std::fmt;

/// 节点在`LayerGraph`中的索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 一条有向边在某一端的记录
///
/// 同一条逻辑边在上游节点的`connected_to`与下游节点的`connected_by`中各存一份，
/// 两份的`weight`必须始终相等。
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// 边另一端的节点
    pub node: NodeId,
    /// 由构建者初始化；训练前必须为具体数值
    pub weight: Option<f32>,
}

impl Connection {
    pub const fn new(node: NodeId, weight: Option<f32>) -> Self {
        Self { node, weight }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    /// 本样本的激活值（同时作为前向累加器），跨样本复用，进入下一样本前须归零
    pub(crate) value: f32,
    /// 激活前的累加和（不含偏置），供反向传播求导
    pub(crate) weighted_sum: f32,
    pub(crate) connected_to: Vec<Connection>,
    pub(crate) connected_by: Vec<Connection>,
}

impl Node {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: 0.0,
            weighted_sum: 0.0,
            connected_to: Vec::new(),
            connected_by: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn value(&self) -> f32 {
        self.value
    }

    pub const fn weighted_sum(&self) -> f32 {
        self.weighted_sum
    }

    /// 下游连接
    pub fn connected_to(&self) -> &[Connection] {
        &self.connected_to
    }

    /// 上游连接
    pub fn connected_by(&self) -> &[Connection] {
        &self.connected_by
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "节点[{}]", self.name)
    }
}
