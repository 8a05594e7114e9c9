// Text preparation: citation stripping, normalization, tokenization, stopwords.

pub mod normalize;
pub mod stopwords;
pub mod tokenize;
