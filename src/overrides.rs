//! 构造参数覆盖
//!
//! 带覆盖参数的解析路径所使用的有序 (参数类型, 参数实例) 序列

use std::any::{Any, TypeId};
use std::sync::Arc;

/// 单个覆盖参数
#[derive(Clone)]
pub struct OverrideArg {
    type_id: TypeId,
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl OverrideArg {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 以目标参数类型取回覆盖值
    pub fn value<P: Send + Sync + 'static>(&self) -> Option<Arc<P>> {
        self.value.clone().downcast::<P>().ok()
    }
}

/// 构造参数覆盖序列，顺序即构造参数顺序
#[derive(Clone, Default)]
pub struct ConstructorOverrides {
    args: Vec<OverrideArg>,
}

impl ConstructorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个覆盖参数，保持加入顺序
    pub fn with<P: Send + Sync + 'static>(mut self, value: P) -> Self {
        self.args.push(OverrideArg {
            type_id: TypeId::of::<P>(),
            type_name: std::any::type_name::<P>(),
            value: Arc::new(value),
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverrideArg> {
        self.args.iter()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let overrides = ConstructorOverrides::new()
            .with(1u32)
            .with("second".to_string())
            .with(3.0f64);

        let names: Vec<_> = overrides.iter().map(|arg| arg.type_name()).collect();
        assert_eq!(overrides.len(), 3);
        assert_eq!(names[0], "u32");
        assert!(names[1].contains("String"));
        assert_eq!(names[2], "f64");
    }

    #[test]
    fn typed_value_retrieval() {
        let overrides = ConstructorOverrides::new().with(42u32);
        let arg = overrides.iter().next().unwrap();

        assert_eq!(*arg.value::<u32>().unwrap(), 42);
        assert!(arg.value::<String>().is_none());
    }
}
