//! 桥接器错误类型
//!
//! 错误只向调用方传播，不在本地重试、回退或记录日志

use std::fmt;

/// 定位器桥接错误
#[derive(Debug)]
pub enum LocatorError {
    /// 后端解析器无法提供请求的类型/契约
    UnregisteredType {
        type_name: String,
        contract: Option<String>,
    },
    /// 带覆盖参数的直接构造失败（目标类型未记录，或构造被拒绝）
    Construction {
        target: Option<String>,
        reason: String,
    },
    /// 类型擦除后的向下转型失败
    TypeCastFailed { expected: String, actual: String },
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorError::UnregisteredType {
                type_name,
                contract,
            } => {
                write!(f, "Service '{}' is not registered", type_name)?;
                if let Some(name) = contract {
                    write!(f, " under contract '{}'", name)?;
                }
                Ok(())
            }
            LocatorError::Construction { target, reason } => match target {
                Some(name) => write!(f, "Failed to construct '{}': {}", name, reason),
                None => write!(f, "Failed to construct service: {}", reason),
            },
            LocatorError::TypeCastFailed { expected, actual } => {
                write!(f, "Type cast failed: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for LocatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_contract_when_present() {
        let err = LocatorError::UnregisteredType {
            type_name: "demo::Service".to_string(),
            contract: Some("primary".to_string()),
        };
        let text = err.to_string();
        assert!(text.contains("demo::Service"));
        assert!(text.contains("primary"));
    }

    #[test]
    fn construction_display_handles_absent_target() {
        let err = LocatorError::Construction {
            target: None,
            reason: "target type is unresolved".to_string(),
        };
        assert!(err.to_string().contains("target type is unresolved"));
    }
}
