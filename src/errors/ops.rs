use std::fmt::{self, Display};

/// 函数目录中的函数种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Activation,
    Derivative,
    Cost,
}
impl Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            FunctionKind::Activation => "激活",
            FunctionKind::Derivative => "导数",
            FunctionKind::Cost => "代价",
        };
        write!(f, "{}", kind_name)
    }
}

/// 比较运算符
#[derive(Debug, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    GreaterThan,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
            ComparisonOperator::GreaterThan => ">",
        };
        write!(f, "{}", operator_name)
    }
}
