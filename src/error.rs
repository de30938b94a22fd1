#[derive(Debug, thiserror::Error)]
pub enum GaugeError {
    #[error("config error: {0}")]
    Config(String),
    #[error("cannot open input: {0}")]
    Input(#[source] std::io::Error),
    #[error("malformed snapshot record: {0}")]
    Snapshot(String),
    #[error("line sink error: {0}")]
    Sink(#[source] std::io::Error),
}
