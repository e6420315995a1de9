pub mod params;
pub mod tokenizer;

pub use params::ParamPair;
pub use tokenizer::has_token_scheme;
pub use tokenizer::tokenize;
pub use tokenizer::unquote;
pub use tokenizer::TOKEN_SCHEME;
