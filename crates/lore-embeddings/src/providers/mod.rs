mod onnx_provider;
mod tfidf_fallback;

pub use onnx_provider::OnnxProvider;
pub use tfidf_fallback::TfIdfFallback;
