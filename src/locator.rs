//! 进程级定位器槽位
//!
//! 外层框架通过单一全局可变槽位发现当前解析器。
//! 槽位只在适配器构造与释放时写入，其余操作一律不触碰。
//! 隔离在 `current`/`install` 之后，便于测试沙箱化

use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::resolver::{Resolver, StandardResolver};

lazy_static! {
    static ref CURRENT: RwLock<Arc<dyn Resolver>> =
        RwLock::new(Arc::new(StandardResolver::new()));
}

/// 读取当前进程级解析器
pub fn current() -> Arc<dyn Resolver> {
    CURRENT.read().clone()
}

/// 安装进程级解析器，返回被替换的旧实例
pub fn install(resolver: Arc<dyn Resolver>) -> Arc<dyn Resolver> {
    let mut slot = CURRENT.write();
    std::mem::replace(&mut *slot, resolver)
}
