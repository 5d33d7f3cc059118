use std::sync::Arc;

use tracing::{info_span, Instrument};

use nc_core::model_info::ModelInfo;
use nc_core::ports::{ModelInfoPort, TransportError};

pub struct GetModelInfo {
    model_info: Arc<dyn ModelInfoPort>,
}

impl GetModelInfo {
    pub fn new(model_info: Arc<dyn ModelInfoPort>) -> Self {
        Self { model_info }
    }

    pub async fn execute(&self) -> Result<ModelInfo, TransportError> {
        self.model_info
            .model_info()
            .instrument(info_span!("usecase.get_model_info.execute"))
            .await
    }
}
