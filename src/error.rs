use thiserror::Error;
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("data artifact missing or unreadable: {path}")]
    MissingData {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data artifact: {0}")]
    MalformedData(String),
}
impl From<serde_json::Error> for SimulationError {
    fn from(value: serde_json::Error) -> Self {
        SimulationError::MalformedData(value.to_string())
    }
}
