/*
 * @Description  : 输出误差的日志协作者
 */

/// 接收每个样本输出误差的日志协作者
pub trait ErrorSink {
    fn record(&mut self, sample_index: usize, error: f32);
}

/// 默认实现：通过`tracing`输出
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record(&mut self, sample_index: usize, error: f32) {
        tracing::info!(sample = sample_index, error, "输出层误差");
    }
}
