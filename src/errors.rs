use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum NeuronError {
    #[fail(display = "Invalid input: {}", _0)]
    InvalidInput(String),
    #[fail(display = "{} must be fitted before being used", _0)]
    UninitializedModel(&'static str),
    #[fail(
        display = "Expected a feature vector of dimension {} but found {}",
        expected, found
    )]
    DimensionMismatch { expected: usize, found: usize },
    #[fail(display = "Not enough samples to stratify: {}", _0)]
    InsufficientClassSamples(String),
    #[fail(display = "Invalid dataset: {}", _0)]
    DatasetSchemaError(String),
    #[fail(display = "Unable to read model file '{}'", _0)]
    ModelLoad(String),
    #[fail(display = "Expected model version {} but found {}", runner, model)]
    WrongModelVersion { model: String, runner: &'static str },
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
