//! Grammar front end for the function notation

use super::ast::RawFunction;
use super::error::NotationError;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/notation/grammar.rs"));
}

/// Parse one line into the raw tree, without semantic checks
pub(super) fn parse_raw(input: &str) -> Result<RawFunction, NotationError> {
    if input.trim().is_empty() {
        return Err(NotationError::Empty);
    }
    parser_impl::FunctionParser::new()
        .parse(input)
        .map_err(|e| {
            let position = match &e {
                ParseError::InvalidToken { location } => Some(*location),
                ParseError::UnrecognizedEof { location, .. } => Some(*location),
                ParseError::UnrecognizedToken { token, .. } => Some(token.0),
                ParseError::ExtraToken { token } => Some(token.0),
                ParseError::User { .. } => None,
            };
            NotationError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })
}
