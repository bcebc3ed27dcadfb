//! 单个输出值的代价函数，参数顺序统一为`(target, output)`

/// 输出被截断到`[EPSILON, 1 - EPSILON]`，避免ln(0)
const BCE_EPSILON: f32 = 1e-7;

/// 单样本均方误差：(t - o)²
pub fn mean_squared_error(target: f32, output: f32) -> f32 {
    (target - output).powi(2)
}

pub fn mean_absolute_error(target: f32, output: f32) -> f32 {
    (target - output).abs()
}

/// -(t·ln(o) + (1 - t)·ln(1 - o))
pub fn binary_cross_entropy(target: f32, output: f32) -> f32 {
    let o = output.clamp(BCE_EPSILON, 1.0 - BCE_EPSILON);
    -(target * o.ln() + (1.0 - target) * (1.0 - o).ln())
}
