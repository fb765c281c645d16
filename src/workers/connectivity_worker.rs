// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::settings::ConnectivitySettings;
use crate::infrastructure::connectivity::SharedConnectivity;

/// 连通性探测工作器
///
/// 定期向探测地址发送HEAD请求，据此更新共享的离线标志。
/// 只要收到任何HTTP响应就视为在线。
pub struct ConnectivityWorker {
    client: Client,
    probe_url: String,
    interval: Duration,
    connectivity: SharedConnectivity,
}

impl ConnectivityWorker {
    pub fn new(
        probe_url: impl Into<String>,
        interval: Duration,
        timeout: Duration,
        connectivity: SharedConnectivity,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            probe_url: probe_url.into(),
            interval,
            connectivity,
        })
    }

    /// 根据配置创建，未配置探测地址时返回 `None`
    pub fn from_settings(
        settings: &ConnectivitySettings,
        connectivity: SharedConnectivity,
    ) -> Result<Option<Self>, reqwest::Error> {
        let Some(probe_url) = settings.probe_url.as_deref().filter(|u| !u.trim().is_empty()) else {
            return Ok(None);
        };

        Self::new(
            probe_url.trim(),
            Duration::from_secs(settings.probe_interval_secs.max(1)),
            Duration::from_millis(settings.probe_timeout_ms),
            connectivity,
        )
        .map(Some)
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(probe_url = %self.probe_url, "Connectivity worker started");

        let mut interval = tokio::time::interval(self.interval);
        loop {
            interval.tick().await;
            self.probe_once().await;
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 探测一次并更新标志，返回是否离线
    pub async fn probe_once(&self) -> bool {
        let offline = match self.client.head(&self.probe_url).send().await {
            Ok(_) => false,
            Err(e) => {
                if !e.is_timeout() && !e.is_connect() {
                    warn!("Connectivity probe failed: {}", e);
                }
                true
            }
        };

        let was_offline = self.connectivity.set_offline(offline);
        if was_offline != offline {
            if offline {
                warn!("Network connectivity lost");
            } else {
                info!("Network connectivity restored");
            }
        }

        offline
    }
}
