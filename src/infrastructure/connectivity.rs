// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 网络连通性查询接口
///
/// 同步、无副作用的零参数查询。
pub trait ConnectivityOracle: Send + Sync {
    fn is_offline(&self) -> bool;
}

/// 基于原子布尔量的连通性标志
///
/// 克隆后共享同一个状态，由 `ConnectivityWorker` 或调用方更新。
#[derive(Debug, Clone, Default)]
pub struct SharedConnectivity {
    offline: Arc<AtomicBool>,
}

impl SharedConnectivity {
    pub fn new(offline: bool) -> Self {
        Self {
            offline: Arc::new(AtomicBool::new(offline)),
        }
    }

    /// 更新状态，返回之前的值
    pub fn set_offline(&self, offline: bool) -> bool {
        self.offline.swap(offline, Ordering::SeqCst)
    }
}

impl ConnectivityOracle for SharedConnectivity {
    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}
