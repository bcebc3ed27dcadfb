mod learning_rate;

use crate::nn::{ErrorSink, Layer, LayerGraph};
use std::cell::RefCell;
use std::rc::Rc;

/// 1个输入节点 → 1个输出节点（线性激活，偏置0），唯一权重为`weight`
fn single_link_graph(weight: f32) -> LayerGraph {
    let mut graph =
        LayerGraph::from_layers(&[Layer::new(1), Layer::new(1).activation("linear")]).unwrap();
    graph.fill_weights(weight);
    graph
}

/// 把收到的误差记到共享列表里，供测试检查
#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<(usize, f32)>>>);

impl RecordingSink {
    fn records(&self) -> Vec<(usize, f32)> {
        self.0.borrow().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn record(&mut self, sample_index: usize, error: f32) {
        self.0.borrow_mut().push((sample_index, error));
    }
}
