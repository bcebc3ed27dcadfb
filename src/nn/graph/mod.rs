/*
 * @Description  : 分层网络图：节点、双向连接与层
 *
 * - node.rs: Node / Connection / NodeId
 * - layer.rs: 层配置（Layer）与层实例（NodeGroup）
 * - core.rs: LayerGraph 的存取、连接与校验
 * - node_builders.rs: 按层配置构建全连接网络、初始化权重
 */

mod core;
mod layer;
mod node;
mod node_builders;

pub use self::core::LayerGraph;
pub use layer::{Layer, LayerFlag, NodeGroup};
pub use node::{Connection, Node, NodeId};
