//! 激活函数及其导数（导数的自变量是激活前的累加和）

const LEAKY_RELU_SLOPE: f32 = 0.01;

pub fn linear(x: f32) -> f32 {
    x
}

pub fn linear_derivative(_x: f32) -> f32 {
    1.0
}

/// sigmoid(x) = 1 / (1 + e^(-x))
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// d(sigmoid)/dx = sigmoid(x) * (1 - sigmoid(x))
pub fn sigmoid_derivative(x: f32) -> f32 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

pub fn tanh(x: f32) -> f32 {
    x.tanh()
}

/// d(tanh)/dx = 1 - tanh²(x)
pub fn tanh_derivative(x: f32) -> f32 {
    1.0 - x.tanh().powi(2)
}

pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

pub fn relu_derivative(x: f32) -> f32 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

pub fn leaky_relu(x: f32) -> f32 {
    if x > 0.0 { x } else { LEAKY_RELU_SLOPE * x }
}

pub fn leaky_relu_derivative(x: f32) -> f32 {
    if x > 0.0 { 1.0 } else { LEAKY_RELU_SLOPE }
}
