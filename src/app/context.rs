use crate::app::error::Result;
use crate::config::Config;
use crate::sink::BackendClient;

pub struct AppContext {
    pub config: Config,
    pub backend: BackendClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let backend = BackendClient::new(&config.backend)?;
        Ok(Self { config, backend })
    }
}
