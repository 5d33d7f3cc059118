use async_trait::async_trait;

use crate::model_info::ModelInfo;
use crate::ports::errors::TransportError;

#[async_trait]
pub trait ModelInfoPort: Send + Sync {
    async fn model_info(&self) -> Result<ModelInfo, TransportError>;
}
