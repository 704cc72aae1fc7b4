//! 注册表实现
//!
//! 辅助记录结构：仅在带构造参数覆盖的解析路径上被读取，
//! 普通解析完全由后端解析器承担。所有读写内部同步，无需外部加锁

use dashmap::DashMap;

use crate::key::{ServiceKey, TargetType};

/// 注册表 - (请求类型, 可选契约名) 到目标具体类型的并发映射
///
/// 不变量：同一键任意时刻至多一个目标类型；后写覆盖先写，不报错。
/// 查找未命中返回 `None` 哨兵，从不视为故障。
#[derive(Default)]
pub struct RegistrationTable {
    entries: DashMap<ServiceKey, TargetType>,
}

impl RegistrationTable {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// 记录键到目标类型的映射，覆盖同键的既有条目
    pub fn record(&self, key: ServiceKey, target: TargetType) {
        self.entries.insert(key, target);
    }

    /// 查找键对应的目标类型
    pub fn lookup(&self, key: &ServiceKey) -> Option<TargetType> {
        self.entries.get(key).map(|entry| *entry.value())
    }

    /// 清空整个注册表（释放路径）
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
