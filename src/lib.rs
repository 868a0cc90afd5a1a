pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Attribute, CardinalityBound, ErdExpression, MinMax, Ref};
pub use error::ParseError;
pub use parser::ErdParser;

/// Parses one line of ERD notation, e.g.
/// `relationShip1(Entity1[0,*], A[1,3], normalattr, _pkattr_)`.
pub fn parse(input: &str) -> Result<ErdExpression, ParseError> {
    parser::parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entity_type() {
        let expr = parse("EntityType1(_a_, b, c)").unwrap();
        assert_eq!(expr.name, "EntityType1");
        assert!(expr.is_entity_type());
    }

    #[test]
    fn parse_relationship() {
        let expr = parse("R(A[1,1], B[0,*])").unwrap();
        assert!(expr.is_relationship());
    }

    #[test]
    fn parse_error_mentions_position() {
        let err = parse("R(a%)").unwrap_err();
        assert!(
            err.to_string().contains("position 3"),
            "error should carry the position, got: {err}"
        );
    }

    #[test]
    fn parse_is_idempotent() {
        let input = "relationShip1(Entity1[0,*], A[1,3], normalattr, _pkattr_)";
        assert_eq!(parse(input).unwrap(), parse(input).unwrap());
    }
}
