use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),
}
