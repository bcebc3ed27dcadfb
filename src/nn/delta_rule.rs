/*
 * @Description  : delta规则权重调整量
 */

/// delta规则：单条连接的权重调整量
///
/// `Δw = 学习率 × (输出 - 目标) × 激活导数 × 上游值`
///
/// 调用方用`w - Δw`更新权重，即对平方误差做梯度下降。
/// 注意：隐藏层同样直接使用`target`，不累加下游层传回的误差。
pub fn delta_rule(
    target: f32,
    output: f32,
    derivative: f32,
    upstream_value: f32,
    learning_rate: f32,
) -> f32 {
    learning_rate * (output - target) * derivative * upstream_value
}
