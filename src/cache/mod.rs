//! 对象缓存层
//!
//! 通过注册表按配置选择后端（moka 内存缓存 / redis），JWT 中间件
//! 用它避免每个请求都打一次数据库。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端出错或值不可用，调用方按未命中处理
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明并在进程启动时注册一个缓存插件
///
/// 用法：`declare_object_cache_plugin!("moka", MokaObjectCache);`
/// 要求类型提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ident) => {
        ::paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $ty::new()
                                .map_err($crate::errors::AttendanceSystemError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
