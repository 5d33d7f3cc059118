use super::dto::ModelInfoDto;
use super::map_err;
use crate::bootstrap::AppRuntime;

pub async fn get_model_info(runtime: &AppRuntime) -> Result<ModelInfoDto, String> {
    let info = runtime.app().model_info.execute().await.map_err(map_err)?;
    Ok(ModelInfoDto::from(&info))
}
