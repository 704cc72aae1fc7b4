//! 委托适配器 - 统一容器契约的门面
//!
//! 将 register/resolve/is_registered/dispose 形态的容器调用
//! 翻译为对后端解析器的 (类型, 可选契约名) 操作：
//! - 注册调用先写注册表，再在后端解析器上登记等价绑定
//! - 无覆盖参数的解析直接转发给后端解析器
//! - 带覆盖参数的解析只查询注册表，完全绕过后端解析器

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::error::LocatorError;
use crate::key::{ServiceKey, TargetType};
use crate::locator;
use crate::overrides::ConstructorOverrides;
use crate::resolver::{
    Resolver, ServiceInstance, ServiceLifetime, SharedFactory, StandardResolver,
};
use crate::table::RegistrationTable;

/// 释放时执行的回收动作
type TeardownAction = Box<dyn FnOnce() + Send>;

/// 委托适配器
///
/// 构造时将所持解析器安装为进程级默认解析器并进入 Active 状态；
/// `dispose` 一次性消费回收动作，把槽位还原为全新的空解析器并清空注册表。
/// 状态机单向：Active -> Disposed，重复释放是安全的空操作
pub struct LocatorAdapter {
    resolver: Arc<dyn Resolver>,
    table: RegistrationTable,
    teardown: Mutex<Option<TeardownAction>>,
}

impl LocatorAdapter {
    /// 以全新的标准解析器构造适配器
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(StandardResolver::new()))
    }

    /// 以外部提供的解析器构造适配器
    pub fn with_resolver(resolver: Arc<dyn Resolver>) -> Self {
        locator::install(resolver.clone());
        debug!("locator adapter installed as process-wide resolver");
        Self {
            resolver,
            table: RegistrationTable::new(),
            teardown: Mutex::new(Some(Box::new(|| {
                locator::install(Arc::new(StandardResolver::new()));
            }))),
        }
    }

    /// 所持后端解析器
    pub fn resolver(&self) -> Arc<dyn Resolver> {
        self.resolver.clone()
    }

    /// 注册表当前条目数（诊断用）
    pub fn registration_count(&self) -> usize {
        self.table.len()
    }

    // ===== 注册操作 =====

    /// 注册瞬态绑定：`S` 由 `T` 的默认构造满足
    pub fn register<S, T>(&self) -> &Self
    where
        S: Send + Sync + 'static,
        T: Default + Into<S> + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(None, T::default, ServiceLifetime::Transient)
    }

    /// 注册瞬态绑定，实例由给定工厂产生
    ///
    /// 工厂在每次解析时重新求值，而不是被捕获后忽略
    pub fn register_with<S, T, F>(&self, factory: F) -> &Self
    where
        S: Send + Sync + 'static,
        T: Into<S> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(None, factory, ServiceLifetime::Transient)
    }

    /// 注册具名契约下的瞬态绑定
    pub fn register_named<S, T>(&self, contract: &str) -> &Self
    where
        S: Send + Sync + 'static,
        T: Default + Into<S> + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(Some(contract), T::default, ServiceLifetime::Transient)
    }

    /// 注册具名契约下的瞬态绑定，实例由给定工厂产生
    pub fn register_named_with<S, T, F>(&self, contract: &str, factory: F) -> &Self
    where
        S: Send + Sync + 'static,
        T: Into<S> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(Some(contract), factory, ServiceLifetime::Transient)
    }

    /// 注册惰性单例绑定：首次解析时构造一次，之后返回同一实例
    pub fn register_singleton<S, T>(&self) -> &Self
    where
        S: Send + Sync + 'static,
        T: Default + Into<S> + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(None, T::default, ServiceLifetime::Singleton)
    }

    /// 注册惰性单例绑定，实例由给定工厂产生
    pub fn register_singleton_with<S, T, F>(&self, factory: F) -> &Self
    where
        S: Send + Sync + 'static,
        T: Into<S> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(None, factory, ServiceLifetime::Singleton)
    }

    /// 注册具名契约下的惰性单例绑定
    pub fn register_singleton_named<S, T>(&self, contract: &str) -> &Self
    where
        S: Send + Sync + 'static,
        T: Default + Into<S> + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(Some(contract), T::default, ServiceLifetime::Singleton)
    }

    /// 注册具名契约下的惰性单例绑定，实例由给定工厂产生
    pub fn register_singleton_named_with<S, T, F>(&self, contract: &str, factory: F) -> &Self
    where
        S: Send + Sync + 'static,
        T: Into<S> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.bind::<S, T, _>(Some(contract), factory, ServiceLifetime::Singleton)
    }

    /// 注册常量绑定：给定对象在每次解析时原样返回
    ///
    /// 不经过默认构造，也不写注册表（不存在区别于实例自身类型的目标类型）
    pub fn register_instance<S>(&self, instance: S) -> &Self
    where
        S: Send + Sync + 'static,
    {
        self.bind_constant::<S>(None, instance)
    }

    /// 注册具名契约下的常量绑定
    pub fn register_instance_named<S>(&self, contract: &str, instance: S) -> &Self
    where
        S: Send + Sync + 'static,
    {
        self.bind_constant::<S>(Some(contract), instance)
    }

    // ===== 解析操作 =====

    /// 解析默认契约下的服务；失败原样来自后端解析器
    pub fn resolve<S: Send + Sync + 'static>(&self) -> Result<Arc<S>, LocatorError> {
        self.resolve_keyed::<S>(None)
    }

    /// 解析具名契约下的服务
    pub fn resolve_named<S: Send + Sync + 'static>(
        &self,
        contract: &str,
    ) -> Result<Arc<S>, LocatorError> {
        self.resolve_keyed::<S>(Some(contract))
    }

    /// 带构造参数覆盖的解析
    ///
    /// 注意（刻意保留的历史行为，不要"修正"）：命中/未命中分支与直觉相反。
    /// 注册表命中时本次调用产出"无实例"（`Ok(None)`），覆盖参数被丢弃；
    /// 只有未命中时才会尝试直接构造，而此时目标类型缺失，
    /// 构造以 `Construction` 错误告终。覆盖参数实际上只在未命中路径上被触及
    pub fn resolve_with<S: Send + Sync + 'static>(
        &self,
        overrides: &ConstructorOverrides,
    ) -> Result<Option<Arc<S>>, LocatorError> {
        self.resolve_override_path::<S>(None, overrides)
    }

    /// 带构造参数覆盖的具名解析，分支语义与 [`resolve_with`](Self::resolve_with) 相同
    pub fn resolve_named_with<S: Send + Sync + 'static>(
        &self,
        contract: &str,
        overrides: &ConstructorOverrides,
    ) -> Result<Option<Arc<S>>, LocatorError> {
        self.resolve_override_path::<S>(Some(contract), overrides)
    }

    /// 检查默认契约下是否已注册；无副作用，从不失败
    pub fn is_registered<S: Send + Sync + 'static>(&self) -> bool {
        self.resolver.has_registration(&ServiceKey::of::<S>())
    }

    /// 检查具名契约下是否已注册
    pub fn is_registered_named<S: Send + Sync + 'static>(&self, contract: &str) -> bool {
        self.resolver
            .has_registration(&ServiceKey::named::<S>(contract))
    }

    // ===== 生命周期 =====

    /// 释放适配器：还原进程级解析器槽位并清空注册表
    ///
    /// 回收动作被原子地取走并消费，重复调用是安全的空操作
    pub fn dispose(&self) {
        let action = self.teardown.lock().take();
        if let Some(restore) = action {
            debug!("locator adapter disposed, restoring process-wide resolver slot");
            restore();
        }
        self.table.clear();
    }

    // ===== 内部实现 =====

    /// 注册路径公共部分：先写注册表，再在后端解析器上登记等价绑定
    fn bind<S, T, F>(&self, contract: Option<&str>, factory: F, lifetime: ServiceLifetime) -> &Self
    where
        S: Send + Sync + 'static,
        T: Into<S> + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let key = ServiceKey::keyed::<S>(contract);
        self.table.record(key.clone(), TargetType::of::<T>());

        let erased: SharedFactory = Arc::new(move || {
            let service: S = factory().into();
            Ok(Arc::new(service) as ServiceInstance)
        });
        debug!(
            "registering {} -> {} as {:?}",
            key,
            std::any::type_name::<T>(),
            lifetime
        );
        match lifetime {
            ServiceLifetime::Transient => self.resolver.register_factory(key, erased),
            ServiceLifetime::Singleton => self.resolver.register_singleton_factory(key, erased),
        }
        self
    }

    fn bind_constant<S>(&self, contract: Option<&str>, instance: S) -> &Self
    where
        S: Send + Sync + 'static,
    {
        let key = ServiceKey::keyed::<S>(contract);
        debug!("registering constant binding for {}", key);
        self.resolver
            .register_constant(key, Arc::new(instance) as ServiceInstance);
        self
    }

    fn resolve_keyed<S: Send + Sync + 'static>(
        &self,
        contract: Option<&str>,
    ) -> Result<Arc<S>, LocatorError> {
        let key = ServiceKey::keyed::<S>(contract);
        let raw = self.resolver.get_service(&key)?;
        raw.downcast::<S>()
            .map_err(|_| LocatorError::TypeCastFailed {
                expected: std::any::type_name::<S>().to_string(),
                actual: "unknown type".to_string(),
            })
    }

    fn resolve_override_path<S: Send + Sync + 'static>(
        &self,
        contract: Option<&str>,
        overrides: &ConstructorOverrides,
    ) -> Result<Option<Arc<S>>, LocatorError> {
        let key = ServiceKey::keyed::<S>(contract);
        match self.table.lookup(&key) {
            // 命中：历史行为——本次调用不产出实例
            Some(_target) => Ok(None),
            // 未命中：以缺失的目标类型尝试构造，必然失败
            None => Err(LocatorError::Construction {
                target: None,
                reason: format!(
                    "target type for {} is unresolved; cannot construct with {} override argument(s)",
                    key,
                    overrides.len()
                ),
            }),
        }
    }
}

impl Default for LocatorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LocatorAdapter {
    fn drop(&mut self) {
        self.dispose();
    }
}
