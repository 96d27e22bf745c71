//! Core token types produced by the lexer and consumed by the parser.

mod cook_sdl_string_error;
mod sdl_token;
mod sdl_token_kind;
mod sdl_trivia_token;

pub use cook_sdl_string_error::CookSdlStringError;
pub use sdl_token::SdlToken;
pub use sdl_token::SdlTriviaTokenVec;
pub use sdl_token_kind::SdlTokenKind;
pub use sdl_token_kind::cook_string_literal;
pub use sdl_trivia_token::SdlTriviaToken;

#[cfg(test)]
mod tests;
