//! 注册键定义
//!
//! 以 (运行时类型标识, 可选契约名) 组成的复合键，替代字符串式查找，
//! 保证注册表的不变量可被类型系统检查

use std::any::TypeId;
use std::fmt;

/// 服务注册键 - (请求类型, 可选契约名) 的值对
///
/// 相等性覆盖两个分量：类型标识与契约名都相等时键才相等。
/// 无契约名（`None`）与任何具名契约是不同的键，包括空字符串契约。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceKey {
    type_id: TypeId,
    type_name: &'static str,
    contract: Option<String>,
}

impl ServiceKey {
    /// 构造默认（无名）契约的键
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            contract: None,
        }
    }

    /// 构造具名契约的键
    pub fn named<T: 'static>(contract: impl Into<String>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            contract: Some(contract.into()),
        }
    }

    /// 按可选契约名构造键 - 适配器统一入口
    pub fn keyed<T: 'static>(contract: Option<&str>) -> Self {
        match contract {
            Some(name) => Self::named::<T>(name),
            None => Self::of::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// 类型名称（用于错误信息）
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn contract(&self) -> Option<&str> {
        self.contract.as_deref()
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contract {
            Some(name) => write!(f, "{} ('{}')", self.type_name, name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

/// 目标类型标识 - 注册表记录的待实例化具体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetType {
    type_id: TypeId,
    type_name: &'static str,
}

impl TargetType {
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 检查是否为指定类型
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}
