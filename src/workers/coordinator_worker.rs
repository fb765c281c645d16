// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::channel::ScanEnvelope;
use crate::domain::services::scan_orchestrator::ScanOrchestrator;

/// 协调侧工作器
///
/// 独占编排器实例，从通道中接收扫描请求。每个请求在独立任务中处理，
/// 不同URL之间互不阻塞，回复在编排器给出结果后才发送。
pub struct CoordinatorWorker {
    orchestrator: Arc<ScanOrchestrator>,
    receiver: mpsc::Receiver<ScanEnvelope>,
}

impl CoordinatorWorker {
    pub fn new(orchestrator: Arc<ScanOrchestrator>, receiver: mpsc::Receiver<ScanEnvelope>) -> Self {
        Self {
            orchestrator,
            receiver,
        }
    }

    /// 运行工作器，直到所有发送端关闭
    pub async fn run(mut self) {
        info!("Scan coordinator started");

        while let Some(envelope) = self.receiver.recv().await {
            let orchestrator = Arc::clone(&self.orchestrator);
            tokio::spawn(async move {
                let reply = orchestrator.handle_message(envelope.message).await;
                if envelope.reply.send(reply).is_err() {
                    debug!("Requester went away before the scan settled");
                }
            });
        }

        info!("Scan coordinator stopped");
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
