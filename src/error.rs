use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("could not read product file {path}: {source}")]
    ProductFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid product list in {path}: {source}")]
    ProductParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
