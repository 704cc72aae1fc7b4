//! 后端解析器
//!
//! `Resolver` 是本核心消费的协作者接口：只理解
//! (类型, 可选契约名) 查找，普通解析的权威绑定全部存放于此。
//! `StandardResolver` 为参考实现：DashMap 保存绑定，
//! 单例经 OnceCell 惰性构造且至多一次

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::error::LocatorError;
use crate::key::ServiceKey;

/// 类型擦除后的服务实例
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// 类型擦除后的服务工厂
pub type SharedFactory = Arc<dyn Fn() -> Result<ServiceInstance, LocatorError> + Send + Sync>;

/// 服务生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLifetime {
    /// 瞬态 - 每次解析都重新求值工厂
    Transient,
    /// 单例 - 首次解析时构造一次，之后返回同一实例
    Singleton,
}

/// 后端解析器接口
///
/// 所有方法同步、非阻塞；实现必须支持多线程并发注册与解析
pub trait Resolver: Send + Sync {
    /// 注册瞬态工厂绑定，每次 `get_service` 重新求值
    fn register_factory(&self, key: ServiceKey, factory: SharedFactory);

    /// 注册惰性单例工厂绑定，至多构造一次
    fn register_singleton_factory(&self, key: ServiceKey, factory: SharedFactory);

    /// 注册常量绑定，每次解析原样返回
    fn register_constant(&self, key: ServiceKey, instance: ServiceInstance);

    /// 解析服务；未注册的键返回 `UnregisteredType`
    fn get_service(&self, key: &ServiceKey) -> Result<ServiceInstance, LocatorError>;

    /// 检查键是否已注册；无副作用，从不失败
    fn has_registration(&self, key: &ServiceKey) -> bool;
}

/// 绑定形态
#[derive(Clone)]
enum Binding {
    Factory(SharedFactory),
    Singleton {
        factory: SharedFactory,
        cell: Arc<OnceCell<ServiceInstance>>,
    },
    Constant(ServiceInstance),
}

/// 标准后端解析器
#[derive(Default)]
pub struct StandardResolver {
    bindings: DashMap<ServiceKey, Binding>,
}

impl StandardResolver {
    pub fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }

    /// 已注册的绑定数量
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

impl Resolver for StandardResolver {
    fn register_factory(&self, key: ServiceKey, factory: SharedFactory) {
        // 同键重复注册：后写覆盖先写
        self.bindings.insert(key, Binding::Factory(factory));
    }

    fn register_singleton_factory(&self, key: ServiceKey, factory: SharedFactory) {
        // 重新注册会重置已缓存的单例实例
        self.bindings.insert(
            key,
            Binding::Singleton {
                factory,
                cell: Arc::new(OnceCell::new()),
            },
        );
    }

    fn register_constant(&self, key: ServiceKey, instance: ServiceInstance) {
        self.bindings.insert(key, Binding::Constant(instance));
    }

    fn get_service(&self, key: &ServiceKey) -> Result<ServiceInstance, LocatorError> {
        // 先克隆绑定再求值，避免在持有分片锁时运行工厂
        let binding = self
            .bindings
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LocatorError::UnregisteredType {
                type_name: key.type_name().to_string(),
                contract: key.contract().map(str::to_string),
            })?;

        match binding {
            Binding::Factory(factory) => factory(),
            Binding::Singleton { factory, cell } => {
                let instance = cell.get_or_try_init(|| factory())?;
                Ok(instance.clone())
            }
            Binding::Constant(instance) => Ok(instance),
        }
    }

    fn has_registration(&self, key: &ServiceKey) -> bool {
        self.bindings.contains_key(key)
    }
}
