//! # Delta Net
//!
//! `delta_net`用逐样本的delta规则训练全连接分层前馈网络：
//! 每个样本做一次前向传播，在输出层计算代价，每`batch_size`个样本做一次反向传播，
//! 并根据相邻样本误差的走势随机微调学习率。
//!

pub mod distribution;
pub mod errors;
pub mod nn;
pub mod utils;
