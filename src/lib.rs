//! locbridge - 依赖解析桥接器
//!
//! 让面向统一容器契约（具名注册、单例/瞬态生命周期、构造式实例化）
//! 编写的代码，透明地由只理解 (类型, 可选契约名) 查找的
//! 后端解析器提供服务。
//!
//! 核心是双向映射与委托逻辑：
//! - 注册调用先写入注册表，再在后端解析器上登记等价绑定
//! - 普通解析直接转发给后端解析器
//! - 带构造参数覆盖的解析只查询注册表（分支语义见
//!   [`LocatorAdapter::resolve_with`] 的说明）

pub mod adapter;
pub mod error;
pub mod key;
pub mod locator;
pub mod overrides;
pub mod resolver;
pub mod table;

// Re-export commonly used items for convenience
pub use adapter::LocatorAdapter;
pub use error::LocatorError;
pub use key::{ServiceKey, TargetType};
pub use overrides::ConstructorOverrides;
pub use resolver::{Resolver, ServiceInstance, ServiceLifetime, SharedFactory, StandardResolver};
pub use table::RegistrationTable;
