/*
 * @Description  : 层的构建期配置与层实例
 */

use super::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFlag {
    Input,
    Output,
}

/// 层的构建期描述，只供图构建者使用
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub node_count: usize,
    pub activation: Option<String>,
    pub bias: f32,
}

impl Layer {
    pub const fn new(node_count: usize) -> Self {
        Self {
            node_count,
            activation: None,
            bias: 0.0,
        }
    }

    pub fn activation(mut self, key: &str) -> Self {
        self.activation = Some(key.to_string());
        self
    }

    pub fn bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }
}

/// 层实例：共享同一激活函数与偏置的一组有序节点
#[derive(Debug, Clone)]
pub struct NodeGroup {
    pub nodes: Vec<NodeId>,
    pub activation: Option<String>,
    pub bias: f32,
    pub flags: Vec<LayerFlag>,
    /// 输出层每个样本更新一次的误差
    pub error: f32,
}

impl NodeGroup {
    pub fn new(nodes: Vec<NodeId>, activation: Option<String>, bias: f32) -> Self {
        Self {
            nodes,
            activation,
            bias,
            flags: Vec::new(),
            error: 0.0,
        }
    }

    pub fn with_flag(mut self, flag: LayerFlag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    pub fn is_input(&self) -> bool {
        self.flags.contains(&LayerFlag::Input)
    }

    pub fn is_output(&self) -> bool {
        self.flags.contains(&LayerFlag::Output)
    }
}
