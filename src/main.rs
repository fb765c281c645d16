// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use phishsentry::application::channel::LocalChannel;
use phishsentry::application::request_deduplicator::RequestDeduplicator;
use phishsentry::classifier::reqwest_classifier::ReqwestClassifier;
use phishsentry::config::settings::Settings;
use phishsentry::domain::services::scan_orchestrator::ScanOrchestrator;
use phishsentry::infrastructure::connectivity::SharedConnectivity;
use phishsentry::infrastructure::metrics::init_metrics;
use phishsentry::presentation::routes;
use phishsentry::utils::telemetry;
use phishsentry::workers::connectivity_worker::ConnectivityWorker;
use phishsentry::workers::coordinator_worker::CoordinatorWorker;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting phishsentry...");

    // 2. Load configuration
    let settings = Settings::new()?;
    let options = settings.scan_options();
    info!(
        endpoint = %options.endpoint,
        timeout_ms = options.timeout.as_millis() as u64,
        "Configuration loaded"
    );

    init_metrics(&settings.metrics);

    // 3. Connectivity oracle and optional probe
    let connectivity = SharedConnectivity::default();
    if let Some(worker) =
        ConnectivityWorker::from_settings(&settings.connectivity, connectivity.clone())?
    {
        worker.start();
    }

    // 4. Coordinator side: orchestrator owned by a single worker
    let classifier = Arc::new(ReqwestClassifier::from_options(&options)?);
    let orchestrator = Arc::new(ScanOrchestrator::new(
        classifier,
        Arc::new(connectivity.clone()),
        &options,
    ));
    let (channel, receiver) =
        LocalChannel::new(settings.channel.queue_capacity, options.reply_timeout);
    CoordinatorWorker::new(orchestrator, receiver).start();

    // 5. Content side: deduplicated requests through the channel
    let deduplicator = Arc::new(RequestDeduplicator::new(Arc::new(channel)));

    // 6. Start HTTP server
    let app = routes::routes(deduplicator, connectivity);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
